// src/noyau/format.rs
//
// Affichage "joli" des valeurs et du flux d'expression.
// - notation exponentielle pour les très grands / très petits
// - au plus 8 décimales, zéros de fin retirés

use super::jetons::Jeton;

/// Formate une valeur pour l'écran principal.
///
/// - |v| > 1e4 ou 0 < |v| < 1e-6 : exponentielle à 2 décimales
/// - sinon : décimal, plafonné à 8 décimales, sans zéros traînants
pub fn format_affichage(valeur: f64) -> String {
    if !valeur.is_finite() {
        return "Erreur".to_string();
    }

    let abs = valeur.abs();
    if abs > 1e4 || (abs > 0.0 && abs < 1e-6) {
        return format!("{valeur:.2e}");
    }

    let brut = format!("{valeur}");
    if let Some((_, decimales)) = brut.split_once('.') {
        if decimales.len() > 8 {
            let fixe = format!("{valeur:.8}");
            return fixe
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string();
        }
    }

    brut
}

/// Ligne d'expression : jetons séparés par des espaces (2 + 3 × 4).
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut morceaux = Vec::with_capacity(jetons.len());
    for jeton in jetons {
        match jeton {
            Jeton::Nombre(n) => morceaux.push(format_affichage(*n)),
            Jeton::Operateur(op) => morceaux.push(op.affiche().to_string()),
        }
    }
    morceaux.join(" ")
}
