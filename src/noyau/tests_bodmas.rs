//! Tests BODMAS : scénarios complets au niveau session.
//!
//! But : dérouler les mêmes enchaînements de touches qu'un utilisateur
//! (nombre, opérateur, nombre, …, =) et vérifier priorités, pourcentage,
//! erreurs et sortie d'erreur. Les briques isolées (RPN, arrondi, format)
//! ont leurs tests dans leurs modules respectifs.

use super::eval::ErreurEval;
use super::expr::{Etat, Session};
use super::jetons::Op;

/// Déroule nombre/opérateur en alternance puis évalue.
/// `suite` : [(nombre, opérateur), …], `dernier` : opérande final.
fn derouler_sur(s: &mut Session, suite: &[(f64, Op)], dernier: f64) -> Result<f64, ErreurEval> {
    for (nombre, op) in suite.iter().copied() {
        s.pousser_nombre(nombre);
        s.pousser_operateur(op)?;
    }
    s.pousser_nombre(dernier);
    s.evaluer(None)
}

fn derouler(suite: &[(f64, Op)], dernier: f64) -> Result<f64, ErreurEval> {
    derouler_sur(&mut Session::nouvelle(), suite, dernier)
}

#[test]
fn addition_simple() {
    assert_eq!(derouler(&[(5.0, Op::Plus)], 3.0), Ok(8.0));
}

#[test]
fn priorite_2_plus_3_fois_4() {
    // 14, pas 20
    assert_eq!(derouler(&[(2.0, Op::Plus), (3.0, Op::Fois)], 4.0), Ok(14.0));
}

#[test]
fn meme_priorite_gauche_droite() {
    // (10 - 2) + 4 = 12, pas 10 - (2 + 4)
    assert_eq!(derouler(&[(10.0, Op::Moins), (2.0, Op::Plus)], 4.0), Ok(12.0));
}

#[test]
fn bodmas_compose() {
    // 10 - 2 × 3 + 4 = 10 - 6 + 4 = 8
    assert_eq!(
        derouler(
            &[(10.0, Op::Moins), (2.0, Op::Fois), (3.0, Op::Plus)],
            4.0
        ),
        Ok(8.0)
    );
}

#[test]
fn division_par_zero() {
    assert_eq!(
        derouler(&[(5.0, Op::Division)], 0.0),
        Err(ErreurEval::DivisionParZero)
    );
}

#[test]
fn depassement_magnitudes_extremes() {
    assert_eq!(
        derouler(&[(1e308, Op::Fois)], 1e308),
        Err(ErreurEval::Depassement)
    );
}

#[test]
fn arrondi_idempotent() {
    // exactement 0.3, pas 0.30000000000000004
    assert_eq!(derouler(&[(0.1, Op::Plus)], 0.2), Ok(0.3));
}

#[test]
fn expression_vide_vaut_zero() {
    let mut s = Session::nouvelle();
    assert_eq!(s.evaluer(None), Ok(0.0));
}

#[test]
fn pourcentage_en_contexte() {
    // 100 + 50 % = 150 (50 % de 100, ajouté à 100)
    let mut s = Session::nouvelle();
    s.pousser_nombre(100.0);
    s.pousser_operateur(Op::Plus).unwrap();
    let attente = s.applique_pourcent(50.0);
    assert_eq!(attente, 50.0);
    assert_eq!(s.evaluer(Some(attente)), Ok(150.0));
}

#[test]
fn pourcentage_autonome() {
    let mut s = Session::nouvelle();
    assert_eq!(s.applique_pourcent(50.0), 0.5);
    assert!(s.est_vide());
}

#[test]
fn sortie_d_erreur_par_saisie() {
    let mut s = Session::nouvelle();
    s.pousser_nombre(5.0);
    s.pousser_operateur(Op::Division).unwrap();
    assert!(s.evaluer(Some(0.0)).is_err());
    assert_eq!(s.etat(), Etat::Erreur);

    // nouvelle saisie numérique : effacement implicite puis reprise
    s.pousser_nombre(2.0);
    s.pousser_operateur(Op::Plus).unwrap();
    assert_eq!(s.evaluer(Some(2.0)), Ok(4.0));
}

#[test]
fn resultat_enchaine() {
    // 2 + 3 = 5, puis × 4 = 20 : le résultat amorce l'expression suivante
    let mut s = Session::nouvelle();
    assert_eq!(derouler_sur(&mut s, &[(2.0, Op::Plus)], 3.0), Ok(5.0));
    s.pousser_operateur(Op::Fois).unwrap();
    assert_eq!(s.evaluer(Some(4.0)), Ok(20.0));
}

#[test]
fn determinisme_session() {
    let suite = [(9.0, Op::Moins), (3.0, Op::Fois), (2.0, Op::Plus)];
    let premier = derouler(&suite, 1.0);
    for _ in 0..5 {
        assert_eq!(derouler(&suite, 1.0), premier);
    }
    // 9 - 3 × 2 + 1 = 4
    assert_eq!(premier, Ok(4.0));
}
