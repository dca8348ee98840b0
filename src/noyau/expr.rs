//! src/noyau/expr.rs
//!
//! Session de calcul : construction incrémentale du flux d'expression.
//!
//! Rôle : maintenir l'alternance Nombre, Opérateur, Nombre, … au fil des
//! actions utilisateur, et décider QUAND replier le flux pour respecter
//! BODMAS sans parseur complet.
//!
//! Contrats :
//! - Le flux commence toujours par un Nombre et alterne strictement.
//! - `%` ne rejoint jamais le flux (voir applique_pourcent).
//! - Pas de singleton global : la Session est une struct explicite,
//!   possédée par l'appelant ; plusieurs calculatrices = plusieurs Sessions.
//! - Aucune exception de contrôle : les échecs remontent en Result.

use super::eval::{evaluer_jetons, ErreurEval};
use super::jetons::{Jeton, Op};

/// Machine à états d'une session.
///
/// L'évaluation étant synchrone, il n'y a pas d'état "en cours" : on passe
/// directement de Saisie à Resultat ou Erreur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Etat {
    /// Rien n'a encore été saisi (ou tout a été effacé).
    #[default]
    Repos,
    /// Le flux se construit, jeton par jeton.
    Saisie,
    /// Le flux est replié sur un unique Nombre : le résultat, qui amorce
    /// l'expression suivante.
    Resultat,
    /// Échec arithmétique : flux jeté, sortie par effacement (explicite
    /// ou implicite à la prochaine saisie numérique).
    Erreur,
}

/// Une session de calcul. Flux vide au départ ; grandit d'un jeton par
/// action ; se replie sur un Nombre après évaluation réussie ; se vide
/// sur effacement ou entrée en erreur.
#[derive(Clone, Debug, Default)]
pub struct Session {
    jetons: Vec<Jeton>,
    etat: Etat,
}

impl Session {
    pub fn nouvelle() -> Self {
        Self::default()
    }

    pub fn etat(&self) -> Etat {
        self.etat
    }

    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn est_vide(&self) -> bool {
        self.jetons.is_empty()
    }

    /// Vide le flux. Appelé sur C/Escape, à l'entrée en erreur, et
    /// implicitement à la création.
    pub fn effacer(&mut self) {
        self.jetons.clear();
        self.etat = Etat::Repos;
    }

    /// Ajoute un Nombre si la position l'attend (flux vide ou terminé par
    /// un opérateur). Si le flux se termine déjà par un Nombre, c'est un
    /// no-op : l'accumulation chiffre à chiffre vit dans l'UI, la session
    /// ne reçoit qu'une valeur finie par position.
    ///
    /// Depuis Erreur, toute saisie numérique efface d'abord (sortie
    /// implicite). Depuis Resultat, un nouveau nombre remplace l'amorce :
    /// taper un chiffre après `=` démarre une expression fraîche.
    pub fn pousser_nombre(&mut self, valeur: f64) {
        if matches!(self.etat, Etat::Erreur | Etat::Resultat) {
            self.jetons.clear();
        }

        if matches!(self.jetons.last(), Some(Jeton::Nombre(_))) {
            return;
        }

        self.jetons.push(Jeton::Nombre(valeur));
        self.etat = Etat::Saisie;
    }

    /// Ajoute un opérateur au flux, en repliant d'abord l'expression si la
    /// priorité le permet déjà :
    ///
    /// - trois jetons ou plus en file ET priorité du nouvel opérateur <=
    ///   priorité de l'opérateur précédent => on replie tout le flux en un
    ///   seul Nombre (le repli est sûr : rien de plus prioritaire ne peut
    ///   encore arriver à sa gauche), puis on ajoute l'opérateur.
    /// - sinon on diffère : `2 + 3 ×` reste en file jusqu'à l'arrivée du 4.
    ///
    /// Retourne Some(valeur) quand un repli a eu lieu (nouvelle valeur
    /// d'affichage), None sinon. Un repli qui échoue (division par zéro au
    /// milieu de la file) fait basculer la session en Erreur.
    ///
    /// Deux opérateurs d'affilée : le second remplace le premier.
    pub fn pousser_operateur(&mut self, op: Op) -> Result<Option<f64>, ErreurEval> {
        // % est une règle d'affichage, pas un jeton de flux
        if op == Op::PourCent {
            return Ok(None);
        }

        if matches!(self.jetons.last(), Some(Jeton::Operateur(_))) {
            self.jetons.pop();
        }

        // un opérateur a besoin d'un opérande à sa gauche
        if self.jetons.is_empty() {
            return Ok(None);
        }

        let mut repli = None;

        if self.jetons.len() >= 3 {
            if let Some(Jeton::Operateur(precedent)) = self.jetons.get(self.jetons.len() - 2) {
                if op.precedence() <= precedent.precedence() {
                    let valeur = match evaluer_jetons(&self.jetons) {
                        Ok(v) => v,
                        Err(e) => {
                            self.jetons.clear();
                            self.etat = Etat::Erreur;
                            return Err(e);
                        }
                    };
                    self.jetons.clear();
                    self.jetons.push(Jeton::Nombre(valeur));
                    repli = Some(valeur);
                }
            }
        }

        self.jetons.push(Jeton::Operateur(op));
        self.etat = Etat::Saisie;
        Ok(repli)
    }

    /// Règle du pourcentage, hors contrat d'alternance :
    ///
    /// - flux non vide : relatif au Nombre le plus récent du flux
    ///   (`dernier × brute / 100`). La valeur rendue devient la valeur en
    ///   attente côté UI (100 + 50 % => 50, additionné à 100 au `=`). Si le
    ///   flux se termine déjà par un Nombre (amorce de résultat), celui-ci
    ///   est remplacé sur place.
    /// - flux vide : pourcentage autonome (`brute / 100`), aucune mutation.
    pub fn applique_pourcent(&mut self, valeur_brute: f64) -> f64 {
        let dernier = self.jetons.iter().rev().find_map(|j| match j {
            Jeton::Nombre(n) => Some(*n),
            Jeton::Operateur(_) => None,
        });

        match dernier {
            None => valeur_brute / 100.0,
            Some(n) => {
                let valeur = n * valeur_brute / 100.0;
                if let Some(Jeton::Nombre(fin)) = self.jetons.last_mut() {
                    *fin = valeur;
                }
                valeur
            }
        }
    }

    /// Évalue le flux complet. `valeur_courante` est la valeur en attente
    /// côté UI, à mettre en file si la position l'attend encore.
    ///
    /// Succès : le flux se replie sur le résultat arrondi (amorce de la
    /// prochaine expression). Échec : flux jeté, état Erreur.
    pub fn evaluer(&mut self, valeur_courante: Option<f64>) -> Result<f64, ErreurEval> {
        if let Some(v) = valeur_courante {
            self.pousser_nombre(v);
        }

        match evaluer_jetons(&self.jetons) {
            Ok(valeur) => {
                self.jetons.clear();
                self.jetons.push(Jeton::Nombre(valeur));
                self.etat = Etat::Resultat;
                Ok(valeur)
            }
            Err(e) => {
                self.jetons.clear();
                self.etat = Etat::Erreur;
                Err(e)
            }
        }
    }
}
