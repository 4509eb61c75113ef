// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Un écran (tampon ou résultat) + un pavé de touches
// - Tactile : gros boutons
// - Démarche : jetons + RPN du dernier `=`
//
// La vue ne décide rien : chaque bouton devient une Touche pour AppCalc.

use eframe::egui;

use super::etat::{AppCalc, Touche};
use crate::noyau::{Granularite, Op};

/// Pavé : libellé + touche, ligne par ligne.
const PAVE: [[(&str, Touche); 4]; 5] = [
    [
        ("C", Touche::Clear),
        ("( )", Touche::Parenthese),
        ("^", Touche::Operateur(Op::POW)),
        ("/", Touche::Operateur(Op::Slash)),
    ],
    [
        ("7", Touche::Chiffre(7)),
        ("8", Touche::Chiffre(8)),
        ("9", Touche::Chiffre(9)),
        ("×", Touche::Operateur(Op::Star)),
    ],
    [
        ("4", Touche::Chiffre(4)),
        ("5", Touche::Chiffre(5)),
        ("6", Touche::Chiffre(6)),
        ("−", Touche::Operateur(Op::Minus)),
    ],
    [
        ("1", Touche::Chiffre(1)),
        ("2", Touche::Chiffre(2)),
        ("3", Touche::Chiffre(3)),
        ("+", Touche::Operateur(Op::Plus)),
    ],
    [
        ("±", Touche::Signe),
        ("0", Touche::Chiffre(0)),
        (".", Touche::Virgule),
        ("=", Touche::Egal),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice à jetons");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_reglages(ui);
                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.ecran().texte.as_str())
                            .monospace()
                            .size(28.0),
                    );
                });
            });

        let erreur = self.ecran().erreur.as_str();
        if !erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton(
                ui,
                "DEL",
                "Efface le dernier caractère",
                Touche::Effacer(Granularite::Caractere),
            );
            self.bouton(
                ui,
                "⌫",
                "Efface le dernier jeton",
                Touche::Effacer(Granularite::Jeton),
            );
            self.bouton(ui, "(", "Parenthèse ouvrante", Touche::Ouvrante);
            self.bouton(ui, ")", "Parenthèse fermante", Touche::Fermante);
        });

        egui::Grid::new("pave_jetons")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (label, touche) in ligne {
                        let resp = ui.add_sized([64.0, 44.0], egui::Button::new(label));
                        if resp.clicked() {
                            self.appuyer(touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Décimales :");
            let mut d = self.moteur.reglages().decimales as u32;
            let resp = ui.add(egui::DragValue::new(&mut d).speed(1).range(0..=15));
            if resp.changed() {
                self.set_decimales(d as usize);
            }

            let mut droite = self.moteur.reglages().puissance_associative_droite;
            if ui.checkbox(&mut droite, "^ associatif à droite").changed() {
                self.moteur.reglages_mut().puissance_associative_droite = droite;
            }
        });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                ui.label("Jetons :");
                ui.monospace(self.demarche.jetons.as_str());
                ui.add_space(4.0);
                ui.label("RPN :");
                ui.monospace(self.demarche.rpn.as_str());
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let resp = ui
            .add_sized([64.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}

/// Clavier physique -> touche.
pub fn touche_du_texte(c: char) -> Option<Touche> {
    let t = match c {
        '0'..='9' => Touche::Chiffre(c as u8 - b'0'),
        '.' | ',' => Touche::Virgule,
        '+' => Touche::Operateur(Op::Plus),
        '-' => Touche::Operateur(Op::Minus),
        '*' | 'x' | '×' => Touche::Operateur(Op::Star),
        '/' => Touche::Operateur(Op::Slash),
        '^' => Touche::Operateur(Op::POW),
        '(' => Touche::Ouvrante,
        ')' => Touche::Fermante,
        '=' => Touche::Egal,
        _ => return None,
    };
    Some(t)
}
