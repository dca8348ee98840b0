//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : accumuler la saisie chiffre à chiffre, tenir l'affichage courant,
//! le drapeau d'erreur et le registre mémoire, et relayer les actions vers
//! la Session du noyau. La session ne reçoit qu'une valeur finie par
//! position ; tout ce qui est "texte en cours de frappe" vit ici.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par noyau::Session.
//! - Depuis l'erreur, une saisie numérique efface puis accepte le chiffre ;
//!   les opérateurs sont ignorés, seul C (ou une saisie) fait sortir.

use crate::noyau::format::format_affichage;
use crate::noyau::{ErreurEval, Op, Session};

/// Garde-fou : longueur de saisie (chiffres + signe, point exclu).
const LONGUEUR_SAISIE_MAX: usize = 15;

/// Texte affiché quand la session est en erreur.
const AFFICHAGE_ERREUR: &str = "Erreur";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- écran ---
    pub affichage: String,

    // --- saisie ---
    // true : le prochain chiffre démarre un nouvel opérande
    // (après un opérateur, un rappel mémoire ou un =)
    pub attente_nouvelle_saisie: bool,
    pub en_erreur: bool,

    // --- registre mémoire (persisté, voir noyau::memoire) ---
    pub memoire: f64,

    // --- noyau ---
    pub session: Session,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::nouveau(0.0)
    }
}

impl AppCalc {
    /// `memoire` : registre chargé au démarrage (0.0 si stockage dégradé).
    pub fn nouveau(memoire: f64) -> Self {
        Self {
            affichage: "0".to_string(),
            attente_nouvelle_saisie: false,
            en_erreur: false,
            memoire,
            session: Session::nouvelle(),
        }
    }

    /// Valeur numérique de l'écran. "Erreur" (ou tout texte illisible)
    /// vaut 0 ; ce chemin n'est jamais pris hors état d'erreur.
    pub fn valeur_courante(&self) -> f64 {
        self.affichage.parse().unwrap_or(0.0)
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn saisir_chiffre(&mut self, chiffre: char) {
        if !chiffre.is_ascii_digit() {
            return;
        }

        // sortie d'erreur implicite : on efface PUIS on accepte le chiffre
        if self.en_erreur {
            self.effacer_tout();
        }

        if self.attente_nouvelle_saisie || self.affichage == "0" {
            self.affichage = chiffre.to_string();
            self.attente_nouvelle_saisie = false;
        } else if self.affichage.replace('.', "").len() < LONGUEUR_SAISIE_MAX {
            self.affichage.push(chiffre);
        }
    }

    pub fn saisir_point(&mut self) {
        if self.en_erreur {
            self.effacer_tout();
        }

        if self.attente_nouvelle_saisie {
            self.affichage = "0.".to_string();
            self.attente_nouvelle_saisie = false;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /// DEL : retire le dernier caractère, retombe sur "0".
    pub fn effacer_dernier(&mut self) {
        if self.en_erreur || self.attente_nouvelle_saisie {
            return;
        }

        self.affichage.pop();
        if self.affichage.is_empty() || self.affichage == "-" {
            self.affichage = "0".to_string();
        }
    }

    /// C : remise à zéro complète (écran + session, mémoire conservée).
    pub fn effacer_tout(&mut self) {
        self.affichage = "0".to_string();
        self.attente_nouvelle_saisie = false;
        self.en_erreur = false;
        self.session.effacer();
    }

    /* ------------------------ Opérateurs / évaluation ------------------------ */

    pub fn pousser_operateur(&mut self, op: Op) {
        if self.en_erreur {
            return;
        }

        if op == Op::PourCent {
            let valeur = self.session.applique_pourcent(self.valeur_courante());
            self.affichage = format_affichage(valeur);
            return;
        }

        if !self.attente_nouvelle_saisie {
            self.session.pousser_nombre(self.valeur_courante());
        }

        match self.session.pousser_operateur(op) {
            Ok(Some(repli)) => self.affichage = format_affichage(repli),
            Ok(None) => {}
            Err(e) => {
                self.passer_en_erreur(e);
                return;
            }
        }

        self.attente_nouvelle_saisie = true;
    }

    pub fn evaluer(&mut self) {
        if self.en_erreur || self.session.est_vide() {
            return;
        }

        let pendante = if self.attente_nouvelle_saisie {
            None
        } else {
            Some(self.valeur_courante())
        };

        match self.session.evaluer(pendante) {
            Ok(valeur) => {
                self.affichage = format_affichage(valeur);
                self.attente_nouvelle_saisie = true;
            }
            Err(e) => self.passer_en_erreur(e),
        }
    }

    fn passer_en_erreur(&mut self, erreur: ErreurEval) {
        tracing::warn!("échec d'évaluation : {erreur}");
        self.en_erreur = true;
        self.attente_nouvelle_saisie = true;
        self.affichage = AFFICHAGE_ERREUR.to_string();
    }

    /* ------------------------ Mémoire ------------------------ */

    /// MS : mémorise la valeur affichée (écrite au stockage par App::save).
    pub fn memoriser(&mut self) {
        if self.en_erreur {
            return;
        }
        self.memoire = self.valeur_courante();
    }

    /// MR : rappelle la mémoire comme opérande courant.
    pub fn rappeler(&mut self) {
        if self.en_erreur {
            self.effacer_tout();
        }
        self.affichage = format_affichage(self.memoire);
        self.attente_nouvelle_saisie = false;
    }

    /// MC : remet le registre à zéro.
    pub fn effacer_memoire(&mut self) {
        self.memoire = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::AppCalc;
    use crate::noyau::Op;

    fn taper(app: &mut AppCalc, texte: &str) {
        for c in texte.chars() {
            match c {
                '.' => app.saisir_point(),
                _ => app.saisir_chiffre(c),
            }
        }
    }

    #[test]
    fn accumulation_chiffres() {
        let mut app = AppCalc::default();
        taper(&mut app, "100");
        assert_eq!(app.affichage, "100");
        assert_eq!(app.valeur_courante(), 100.0);
    }

    #[test]
    fn zero_de_tete_remplace() {
        let mut app = AppCalc::default();
        taper(&mut app, "07");
        assert_eq!(app.affichage, "7");
    }

    #[test]
    fn point_unique() {
        let mut app = AppCalc::default();
        taper(&mut app, "3.1.4");
        assert_eq!(app.affichage, "3.14");
    }

    #[test]
    fn saisie_plafonnee_a_15() {
        let mut app = AppCalc::default();
        taper(&mut app, "12345678901234567890");
        assert_eq!(app.affichage.len(), 15);
    }

    #[test]
    fn del_retire_puis_retombe_sur_zero() {
        let mut app = AppCalc::default();
        taper(&mut app, "42");
        app.effacer_dernier();
        assert_eq!(app.affichage, "4");
        app.effacer_dernier();
        assert_eq!(app.affichage, "0");
        app.effacer_dernier();
        assert_eq!(app.affichage, "0");
    }

    #[test]
    fn scenario_bodmas_complet() {
        // 2 + 3 × 4 = 14 au clavier/boutons
        let mut app = AppCalc::default();
        taper(&mut app, "2");
        app.pousser_operateur(Op::Plus);
        taper(&mut app, "3");
        app.pousser_operateur(Op::Fois);
        taper(&mut app, "4");
        app.evaluer();
        assert_eq!(app.affichage, "14");
    }

    #[test]
    fn scenario_repli_anticipe() {
        // 2 × 3 + : l'écran montre 6 dès le +
        let mut app = AppCalc::default();
        taper(&mut app, "2");
        app.pousser_operateur(Op::Fois);
        taper(&mut app, "3");
        app.pousser_operateur(Op::Plus);
        assert_eq!(app.affichage, "6");
        taper(&mut app, "4");
        app.evaluer();
        assert_eq!(app.affichage, "10");
    }

    #[test]
    fn scenario_pourcentage() {
        // 100 + 50 % = 150
        let mut app = AppCalc::default();
        taper(&mut app, "100");
        app.pousser_operateur(Op::Plus);
        taper(&mut app, "50");
        app.pousser_operateur(Op::PourCent);
        assert_eq!(app.affichage, "50");
        app.evaluer();
        assert_eq!(app.affichage, "150");
    }

    #[test]
    fn pourcentage_autonome_ecran() {
        let mut app = AppCalc::default();
        taper(&mut app, "50");
        app.pousser_operateur(Op::PourCent);
        assert_eq!(app.affichage, "0.5");
        assert!(app.session.est_vide());
    }

    #[test]
    fn erreur_puis_chiffre_reprend() {
        let mut app = AppCalc::default();
        taper(&mut app, "5");
        app.pousser_operateur(Op::Division);
        taper(&mut app, "0");
        app.evaluer();
        assert!(app.en_erreur);
        assert_eq!(app.affichage, "Erreur");

        // un opérateur en erreur est ignoré
        app.pousser_operateur(Op::Plus);
        assert!(app.en_erreur);

        // un chiffre efface puis reprend
        app.saisir_chiffre('7');
        assert!(!app.en_erreur);
        assert_eq!(app.affichage, "7");
    }

    #[test]
    fn evaluation_vide_sans_effet() {
        let mut app = AppCalc::default();
        app.evaluer();
        assert_eq!(app.affichage, "0");
        assert!(!app.attente_nouvelle_saisie);
    }

    #[test]
    fn memoire_aller_retour() {
        let mut app = AppCalc::default();
        taper(&mut app, "42.5");
        app.memoriser();
        app.effacer_tout();
        assert_eq!(app.affichage, "0");

        app.rappeler();
        assert_eq!(app.affichage, "42.5");

        app.effacer_memoire();
        assert_eq!(app.memoire, 0.0);
    }

    #[test]
    fn memoire_comme_operande() {
        let mut app = AppCalc::default();
        taper(&mut app, "8");
        app.memoriser();
        app.effacer_tout();

        taper(&mut app, "2");
        app.pousser_operateur(Op::Fois);
        app.rappeler();
        app.evaluer();
        assert_eq!(app.affichage, "16");
    }
}
