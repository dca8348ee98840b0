// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// ------------------------------
// - vers_rpn : convertit le flux infixe (alternance Nombre/Opérateur) en postfix
// - eval_rpn : évalue le postfix sur une pile numérique
//
// Règles:
// - Pas de parenthèses, pas de moins unaire : le flux vient du pavé, un jeton
//   à la fois, donc vers_rpn ne peut pas échouer.
// - Dépilage sur priorité >= : les opérateurs de même priorité sortent de
//   gauche à droite (10 - 2 + 4 se plie en (10 - 2) + 4).

use super::eval::ErreurEval;
use super::jetons::{Jeton, Op};

/// Convertit un flux de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [2, +, 3, ×, 4]
///   rpn:    [2, 3, 4, ×, +]
pub fn vers_rpn(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut sortie: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Op> = Vec::new();

    for jeton in jetons.iter().copied() {
        match jeton {
            Jeton::Nombre(_) => sortie.push(jeton),

            Jeton::Operateur(op) => {
                // dépile tant que le sommet est au moins aussi prioritaire
                while let Some(haut) = ops.last() {
                    if haut.precedence() >= op.precedence() {
                        sortie.push(Jeton::Operateur(ops.pop().unwrap()));
                    } else {
                        break;
                    }
                }
                ops.push(op);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        sortie.push(Jeton::Operateur(op));
    }

    sortie
}

/// Évalue une RPN sur pile numérique : les nombres s'empilent, chaque
/// opérateur dépile b (sommet) puis a et empile `a OP b`.
///
/// L'alternance du flux est garantie par la Session ; un flux dégénéré
/// (opérandes manquants) se comporte comme si les trous valaient 0.
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len() / 2 + 1);

    for jeton in rpn.iter().copied() {
        match jeton {
            Jeton::Nombre(n) => pile.push(n),

            Jeton::Operateur(op) => {
                let b = pile.pop().unwrap_or(0.0);
                let a = pile.pop().unwrap_or(0.0);
                pile.push(appliquer(op, a, b)?);
            }
        }
    }

    Ok(pile.pop().unwrap_or(0.0))
}

/// Applique un opérateur binaire. Seule la division peut échouer ici ;
/// le dépassement (résultat non fini) est contrôlé en aval, voir eval.rs.
fn appliquer(op: Op, a: f64, b: f64) -> Result<f64, ErreurEval> {
    match op {
        Op::Plus => Ok(a + b),
        Op::Moins => Ok(a - b),
        Op::Fois => Ok(a * b),
        Op::Division => {
            if b == 0.0 {
                Err(ErreurEval::DivisionParZero)
            } else {
                Ok(a / b)
            }
        }
        // Jamais mis en flux par la Session (voir applique_pourcent) ;
        // au niveau tranche, on lui donne son sens contextuel : b % de a.
        Op::PourCent => Ok(a * b / 100.0),
    }
}
