// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Ligne d'expression au-dessus de l'écran (la file de jetons du noyau)
// - Tactile : gros boutons, tout passe par une seule Touche (boutons et
//   clavier partagent appuyer())

use eframe::egui;

use crate::noyau::format::{format_affichage, format_jetons};
use crate::noyau::Op;

use super::etat::AppCalc;

/// Une action utilisateur, qu'elle vienne d'un bouton ou du clavier.
#[derive(Clone, Copy, Debug)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operateur(Op),
    Evaluer,
    EffacerTout,
    EffacerDernier,
    Memoriser,
    Rappeler,
    EffacerMemoire,
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice BODMAS");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(6.0);

        self.ui_memoire(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        // file de jetons en cours (vide tant que rien n'est en file)
        let expression = format_jetons(self.session.jetons());
        Self::champ_monospace(ui, "ligne_expression", &expression, 1);

        ui.add_space(4.0);

        Self::champ_monospace(ui, "ecran_principal", &self.affichage, 2);

        if self.en_erreur {
            ui.colored_label(
                ui.visuals().error_fg_color,
                "Expression jetée : C pour effacer, ou tapez un chiffre.",
            );
        }
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton_touche(ui, "MS", "Mémorise la valeur affichée", Touche::Memoriser);
            self.bouton_touche(ui, "MR", "Rappelle la mémoire", Touche::Rappeler);
            self.bouton_touche(ui, "MC", "Efface la mémoire", Touche::EffacerMemoire);

            ui.separator();

            ui.monospace(format!("M = {}", format_affichage(self.memoire)));
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_bodmas")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_touche(ui, "C", "Efface tout", Touche::EffacerTout);
                self.bouton_touche(ui, "DEL", "Efface le dernier chiffre", Touche::EffacerDernier);
                self.bouton_touche(ui, "%", "Pourcentage", Touche::Operateur(Op::PourCent));
                self.bouton_touche(ui, "÷", "Division", Touche::Operateur(Op::Division));
                ui.end_row();

                self.bouton_chiffre(ui, '7');
                self.bouton_chiffre(ui, '8');
                self.bouton_chiffre(ui, '9');
                self.bouton_touche(ui, "×", "Multiplication", Touche::Operateur(Op::Fois));
                ui.end_row();

                self.bouton_chiffre(ui, '4');
                self.bouton_chiffre(ui, '5');
                self.bouton_chiffre(ui, '6');
                self.bouton_touche(ui, "-", "Soustraction", Touche::Operateur(Op::Moins));
                ui.end_row();

                self.bouton_chiffre(ui, '1');
                self.bouton_chiffre(ui, '2');
                self.bouton_chiffre(ui, '3');
                self.bouton_touche(ui, "+", "Addition", Touche::Operateur(Op::Plus));
                ui.end_row();

                self.bouton_chiffre(ui, '0');
                self.bouton_touche(ui, ".", "Point décimal", Touche::Point);
                self.bouton_touche(ui, "=", "Évalue l'expression", Touche::Evaluer);
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, chiffre: char) {
        let label = chiffre.to_string();
        let resp = ui.add_sized([56.0, 36.0], egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(Touche::Chiffre(chiffre));
        }
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let resp = ui
            .add_sized([56.0, 36.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    /// Point d'entrée commun des actions (boutons + clavier).
    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.saisir_chiffre(c),
            Touche::Point => self.saisir_point(),
            Touche::Operateur(op) => self.pousser_operateur(op),
            Touche::Evaluer => self.evaluer(),
            Touche::EffacerTout => self.effacer_tout(),
            Touche::EffacerDernier => self.effacer_dernier(),
            Touche::Memoriser => self.memoriser(),
            Touche::Rappeler => self.rappeler(),
            Touche::EffacerMemoire => self.effacer_memoire(),
        }
    }

    /// Traduit un caractère clavier en touche.
    /// `*` et `/` valent `×` et `÷` ; `=` évalue ; `,` vaut le point.
    pub fn touche_caractere(c: char) -> Option<Touche> {
        if c.is_ascii_digit() {
            return Some(Touche::Chiffre(c));
        }
        match c {
            '.' | ',' => Some(Touche::Point),
            '=' => Some(Touche::Evaluer),
            _ => Op::depuis_caractere(c).map(Touche::Operateur),
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule "stable", sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }
}
