//! Noyau : moteur d'expression incrémental
//!
//! Organisation interne :
//! - jetons.rs   : Tok / Op / Nombre + classification
//! - tampon.rs   : tampon de jetons (règles d'ajout, préfixe toujours valide)
//! - eval.rs     : shunting-yard en une passe (RPN + réduction)
//! - format.rs   : tampon -> texte, résultat -> littéral
//! - moteur.rs   : Moteur<A: Affichage> (tampon + affichage + réglages)
//! - erreurs.rs  : ErreurCalcul
//! - reglages.rs : Reglages

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod reglages;
pub mod tampon;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use erreurs::ErreurCalcul;
pub use jetons::{format_tokens, Op};
pub use moteur::{Affichage, Moteur};
pub use reglages::Reglages;
pub use tampon::Granularite;
