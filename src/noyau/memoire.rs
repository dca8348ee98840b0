//! src/noyau/memoire.rs
//!
//! Registre mémoire : un seul scalaire, persisté en chaîne décimale brute
//! sous une clé fixe dans le stockage clé/valeur d'eframe (fichier en
//! natif, localStorage en web).
//!
//! Stockage indisponible ou illisible => registre en mémoire seule à 0,
//! avec trace ; jamais d'impact sur l'évaluation.

use eframe::Storage;

/// Clé fixe du registre dans le stockage clé/valeur.
pub const CLE_MEMOIRE: &str = "calculatrice_memoire";

/// Lit le registre au démarrage. Dégrade à 0.0 si le stockage manque,
/// si la chaîne ne se lit pas, ou si la valeur lue n'est pas finie.
pub fn charger(stockage: Option<&dyn Storage>) -> f64 {
    let Some(stockage) = stockage else {
        tracing::warn!("stockage indisponible, registre mémoire à 0");
        return 0.0;
    };

    let Some(brut) = stockage.get_string(CLE_MEMOIRE) else {
        return 0.0;
    };

    match brut.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        Ok(v) => {
            tracing::warn!("registre mémoire non fini ({v}), remis à 0");
            0.0
        }
        Err(_) => {
            tracing::warn!("registre mémoire illisible ({brut:?}), remis à 0");
            0.0
        }
    }
}

/// Écrit le registre (chaîne décimale brute). Le flush est à la charge
/// d'eframe (sauvegarde périodique + sortie d'application).
pub fn sauvegarder(stockage: &mut dyn Storage, valeur: f64) {
    stockage.set_string(CLE_MEMOIRE, format!("{valeur}"));
}
