// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier physique en touches

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Granularite;
use etat::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier global : Backspace = caractère, Maj+Backspace = jeton,
        // Échap = C, Entrée = "=". Le texte tapé passe par touche_du_texte.
        let touches: Vec<Touche> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => {
                        Some(t.chars().filter_map(vue::touche_du_texte).collect::<Vec<_>>())
                    }
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => match key {
                        egui::Key::Backspace if modifiers.shift => {
                            Some(vec![Touche::Effacer(Granularite::Jeton)])
                        }
                        egui::Key::Backspace => Some(vec![Touche::Effacer(Granularite::Caractere)]),
                        egui::Key::Escape => Some(vec![Touche::Clear]),
                        egui::Key::Enter => Some(vec![Touche::Egal]),
                        _ => None,
                    },
                    _ => None,
                })
                .flatten()
                .collect()
        });
        for t in touches {
            self.appuyer(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
