//! Noyau BODMAS
//!
//! Organisation interne :
//! - jetons.rs  : union taguée Nombre/Opérateur + priorités
//! - expr.rs    : Session (construction incrémentale + machine à états)
//! - rpn.rs     : shunting-yard + évaluation sur pile
//! - eval.rs    : pipeline complet + erreurs + arrondi
//! - format.rs  : affichage (exponentielle, 8 décimales)
//! - memoire.rs : registre mémoire persistant

pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod memoire;
pub mod rpn;

#[cfg(test)]
mod tests_bodmas;

// API publique minimale
pub use eval::{evaluer_jetons, ErreurEval};
pub use expr::{Etat, Session};
pub use jetons::{Jeton, Op};
