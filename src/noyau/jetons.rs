// src/noyau/jetons.rs

/// Opérateur binaire du pavé.
///
/// Priorités BODMAS :
/// - `+` / `-`  : 1
/// - `×` / `÷`  : 2
/// - `%`        : 3 (intercepté avant le flux, voir expr.rs)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Division,
    PourCent,
}

impl Op {
    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Division => 2,
            Op::PourCent => 3,
        }
    }

    /// Symbole d'affichage (ligne d'expression, boutons).
    pub fn affiche(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Moins => "-",
            Op::Fois => "×",
            Op::Division => "÷",
            Op::PourCent => "%",
        }
    }

    /// Décodage clavier : `*` et `×` sont équivalents, `/` et `÷` aussi.
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Moins),
            '*' | '×' => Some(Op::Fois),
            '/' | '÷' => Some(Op::Division),
            '%' => Some(Op::PourCent),
            _ => None,
        }
    }
}

/// Jeton du flux d'expression : union taguée explicite
/// (pas de devinette sur le type d'un élément, contrairement au JS d'origine).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Operateur(Op),
}
