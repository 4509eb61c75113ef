// src/noyau/format.rs
//
// Affichage :
// - tampon -> texte (tampon vide => "0")
// - résultat f64 -> texte arrondi (écran) et littéral pleine précision (tampon)
// Ni l'un ni l'autre n'utilise d'exposant : on peut continuer à taper des
// chiffres derrière un résultat.

use super::jetons::{Op, Tok};

/// Texte affiché pour le tampon courant.
///
/// Une base dont `^` porte la négation différée reste affichée négative : `(-2)^3`.
pub fn format_tampon(jetons: &[Tok]) -> String {
    if jetons.is_empty() {
        return "0".to_string();
    }
    let mut out = String::new();
    for (i, tok) in jetons.iter().enumerate() {
        match (tok, jetons.get(i + 1)) {
            (
                Tok::Num(base),
                Some(Tok::Op(Op::Caret {
                    negation_differee: true,
                })),
            ) => out.push_str(&format!("(-{})", base.litteral())),
            _ => out.push_str(&tok.to_string()),
        }
    }
    out
}

/// Littéral pleine précision (aller-retour exact via `parse::<f64>`).
pub fn format_litteral(valeur: f64) -> String {
    let s = valeur.to_string();
    if s == "-0" {
        return "0".to_string();
    }
    s
}

/// Texte d'un résultat, arrondi à `decimales` chiffres après le point.
/// Un résultat non nul que l'arrondi effacerait est montré en entier.
pub fn format_resultat(valeur: f64, decimales: usize) -> String {
    let mut s = format!("{valeur:.decimales$}");
    if s.contains('.') {
        let garde = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(garde);
    }
    if s == "-0" || s == "0" {
        return format_litteral(valeur);
    }
    s
}
