//! Noyau — erreurs.
//!
//! Toutes récupérables : après un rapport, le moteur reste éditable.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Jeton refusé : le tampon reste inchangé (mais il est ré-affiché).
    #[error("ajout refusé : {0}")]
    AjoutInvalide(&'static str),

    /// `=` sur un tampon qui n'est pas une expression terminée.
    #[error("expression incomplète")]
    ExpressionIncomplete,

    #[error("division par zéro")]
    DivisionParZero,

    /// Résultat (ou intermédiaire) NaN / infini en f64.
    #[error("résultat non représentable")]
    ResultatNonFini,
}
