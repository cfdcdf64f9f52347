use crate::game::MIN_PLAYERS;

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Players,
    Seed,
    Reveal,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Players, MenuItem::Seed, MenuItem::Reveal];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Players => format!("Players: {}", app.cfg_num_players),
            MenuItem::Seed => {
                if app.cfg_seed == 0 {
                    "Seed: random".to_string()
                } else {
                    format!("Seed: {}", app.cfg_seed)
                }
            }
            MenuItem::Reveal => {
                format!("Reveal all dice: {}", if app.cfg_reveal { "on" } else { "off" })
            }
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_num_players < AppState::MAX_PLAYERS {
                    app.cfg_num_players += 1;
                }
            }
            MenuItem::Seed => {
                app.cfg_seed = app.cfg_seed.saturating_add(1);
            }
            MenuItem::Reveal => app.cfg_reveal = !app.cfg_reveal,
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_num_players > MIN_PLAYERS {
                    app.cfg_num_players -= 1;
                }
            }
            MenuItem::Seed => {
                app.cfg_seed = app.cfg_seed.saturating_sub(1);
            }
            MenuItem::Reveal => app.cfg_reveal = !app.cfg_reveal,
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_num_players = self.game.num_players();
        self.cfg_seed = self.seed;
        self.cfg_reveal = self.reveal;
        self.scene = super::Scene::Menu;
    }

    pub fn apply_menu(&mut self) {
        self.cfg_num_players = self.cfg_num_players.clamp(MIN_PLAYERS, Self::MAX_PLAYERS);
        match Self::deal(self.cfg_num_players, self.cfg_seed) {
            Ok(game) => {
                self.game = game;
                self.seed = self.cfg_seed;
                self.reveal = self.cfg_reveal;
                self.restart_view();
                self.scene = super::Scene::Table;
            }
            Err(err) => log::warn!("menu settings rejected: {err}"),
        }
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_count_is_clamped() {
        let mut app = AppState::new(1).unwrap();
        for _ in 0..20 {
            app.menu_inc();
        }
        assert_eq!(app.cfg_num_players, AppState::MAX_PLAYERS);
        for _ in 0..20 {
            app.menu_dec();
        }
        assert_eq!(app.cfg_num_players, MIN_PLAYERS);
        app.apply_menu();
        assert_eq!(app.game.num_players(), MIN_PLAYERS);
    }

    #[test]
    fn seeded_menu_deals_reproducibly() {
        let mut a = AppState::new(0).unwrap();
        let mut b = AppState::new(0).unwrap();
        a.cfg_seed = 99;
        b.cfg_seed = 99;
        a.apply_menu();
        b.apply_menu();
        assert_eq!(a.game.status(), b.game.status());
        assert_eq!(a.seed, 99);
    }
}
