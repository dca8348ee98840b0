//! Noyau — évaluation (pipeline réel)
//!
//! jetons -> RPN -> pile numérique -> contrôle fini -> arrondi 8 décimales
//!
//! Remarque : l'arrondi fait partie du contrat (pas du cosmétique) ;
//! c'est lui qui garantit 0.1 + 0.2 == 0.3 pour les comparaisons en aval.

use thiserror::Error;

use super::jetons::Jeton;
use super::rpn::{eval_rpn, vers_rpn};

/// Les deux seuls échecs arithmétiques possibles. Tous deux sont
/// déterministes et terminaux pour l'expression en cours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("dépassement de capacité")]
    Depassement,
}

/// API publique : évalue un flux de jetons et retourne soit une valeur
/// finie arrondie, soit une des deux erreurs. Jamais de NaN/infini surfacé.
///
/// Un flux vide vaut 0 par convention.
pub fn evaluer_jetons(jetons: &[Jeton]) -> Result<f64, ErreurEval> {
    if jetons.is_empty() {
        return Ok(0.0);
    }

    let rpn = vers_rpn(jetons);
    let valeur = eval_rpn(&rpn)?;

    if !valeur.is_finite() {
        return Err(ErreurEval::Depassement);
    }

    Ok(arrondir_8(valeur))
}

/// Arrondi à 8 décimales : round(v × 1e8) / 1e8.
///
/// Si v × 1e8 déborde (|v| énorme mais fini), on garde v tel quel :
/// le contrôle is_finite a déjà eu lieu, l'arrondi ne doit pas réintroduire
/// d'infini.
pub fn arrondir_8(valeur: f64) -> f64 {
    let agrandi = valeur * 1e8;
    if agrandi.is_finite() {
        agrandi.round() / 1e8
    } else {
        valeur
    }
}
