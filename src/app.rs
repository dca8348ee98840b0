// src/app.rs
//
// Calculatrice BODMAS — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier est traité ici, globalement : il n'y a aucun champ de texte,
//   donc pas de question de focus. Chiffres et opérateurs arrivent en
//   événements Text ; Enter/Backspace/Escape en événements Key.
// - La persistance du registre mémoire passe par App::save (eframe écrit
//   périodiquement et à la sortie).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::memoire;
use vue::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let evenements = ctx.input(|i| i.events.clone());
        for evenement in evenements {
            match evenement {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        if let Some(touche) = AppCalc::touche_caractere(c) {
                            self.appuyer(touche);
                        }
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.appuyer(Touche::Evaluer),
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.appuyer(Touche::EffacerDernier),
                egui::Event::Key {
                    key: egui::Key::Escape,
                    pressed: true,
                    ..
                } => self.appuyer(Touche::EffacerTout),
                _ => {}
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }

    fn save(&mut self, stockage: &mut dyn eframe::Storage) {
        memoire::sauvegarder(stockage, self.memoire);
    }
}
