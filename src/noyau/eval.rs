//! Noyau — évaluation en UNE passe.
//!
//! Shunting-yard fusionné : pendant le même parcours gauche → droite on
//! construit la RPN (postfixe) ET on réduit. Chaque opérateur qui sort de la
//! pile d'opérateurs est appliqué tout de suite aux deux valeurs du sommet.
//!
//! Précédences : `+ -` = 1, `× /` = 2, `^` = 3.
//! À précédence égale on réduit d'abord (gauche → droite), `^` compris,
//! sauf si `Reglages::puissance_associative_droite`.

use tracing::debug;

use super::erreurs::ErreurCalcul;
use super::format::{format_litteral, format_resultat};
use super::jetons::{format_tokens, Op, Tok};
use super::reglages::Reglages;

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    /// Texte affiché (arrondi à `Reglages::decimales`).
    pub texte: String,
    /// Littéral pleine précision : c'est lui qui remplace le tampon.
    pub litteral: String,
    /// RPN produite pendant le parcours.
    pub postfixe: Vec<Tok>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EnAttente {
    Op(Op),
    LPar,
}

/// Les deux piles d'une évaluation. Elles ne survivent pas à `evaluer`.
#[derive(Debug, Default)]
struct Piles {
    valeurs: Vec<f64>,
    ops: Vec<EnAttente>,
}

/// Réduction : dépile b puis a, pousse `a op b`.
fn reduire(mut piles: Piles, op: Op) -> Result<Piles, ErreurCalcul> {
    let b = piles
        .valeurs
        .pop()
        .ok_or(ErreurCalcul::ExpressionIncomplete)?;
    let a = piles
        .valeurs
        .pop()
        .ok_or(ErreurCalcul::ExpressionIncomplete)?;
    piles.valeurs.push(appliquer(op, a, b)?);
    Ok(piles)
}

fn appliquer(op: Op, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    let r = match op {
        Op::Plus => a + b,
        Op::Minus => a - b,
        Op::Star => a * b,
        Op::Slash => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
        Op::Caret { negation_differee } => {
            let p = a.powf(b);
            if negation_differee {
                -p
            } else {
                p
            }
        }
    };
    if !r.is_finite() {
        return Err(ErreurCalcul::ResultatNonFini);
    }
    Ok(r)
}

/// Faut-il réduire `haut` (sommet de pile) avant d'empiler `entrant` ?
fn doit_reduire(haut: Op, entrant: Op, reglages: &Reglages) -> bool {
    if entrant.est_puissance() && reglages.puissance_associative_droite {
        haut.precedence() > entrant.precedence()
    } else {
        haut.precedence() >= entrant.precedence()
    }
}

/// Évalue une suite de jetons terminée (voir `Tampon::verifier_terminable`).
pub fn evaluer(jetons: &[Tok], reglages: &Reglages) -> Result<Evaluation, ErreurCalcul> {
    let mut piles = Piles::default();
    let mut postfixe: Vec<Tok> = Vec::with_capacity(jetons.len());

    for tok in jetons {
        match tok {
            Tok::Num(n) => {
                let v = n.valeur().ok_or(ErreurCalcul::ExpressionIncomplete)?;
                // littéral trop long pour f64 : "999…9" => inf
                if !v.is_finite() {
                    return Err(ErreurCalcul::ResultatNonFini);
                }
                piles.valeurs.push(v);
                postfixe.push(tok.clone());
            }

            Tok::LPar => piles.ops.push(EnAttente::LPar),

            Tok::RPar => loop {
                match piles.ops.pop() {
                    Some(EnAttente::Op(op)) => {
                        postfixe.push(Tok::Op(op));
                        piles = reduire(piles, op)?;
                    }
                    Some(EnAttente::LPar) => break,
                    None => return Err(ErreurCalcul::ExpressionIncomplete),
                }
            },

            Tok::Op(entrant) => {
                loop {
                    // `(` bloque : on ne dépile jamais au-delà
                    let haut = match piles.ops.last() {
                        Some(EnAttente::Op(haut)) if doit_reduire(*haut, *entrant, reglages) => {
                            *haut
                        }
                        _ => break,
                    };
                    piles.ops.pop();
                    postfixe.push(Tok::Op(haut));
                    piles = reduire(piles, haut)?;
                }
                piles.ops.push(EnAttente::Op(*entrant));
            }
        }
    }

    while let Some(attente) = piles.ops.pop() {
        match attente {
            EnAttente::Op(op) => {
                postfixe.push(Tok::Op(op));
                piles = reduire(piles, op)?;
            }
            EnAttente::LPar => return Err(ErreurCalcul::ExpressionIncomplete),
        }
    }

    let valeur = match piles.valeurs.as_slice() {
        [v] if v.is_finite() => *v,
        [_] => return Err(ErreurCalcul::ResultatNonFini),
        _ => return Err(ErreurCalcul::ExpressionIncomplete),
    };

    debug!(postfixe = %format_tokens(&postfixe), valeur, "expression évaluée");

    Ok(Evaluation {
        valeur,
        texte: format_resultat(valeur, reglages.decimales),
        litteral: format_litteral(valeur),
        postfixe,
    })
}
