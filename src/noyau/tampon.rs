// src/noyau/tampon.rs
//
// Tampon d'expression : la suite de jetons telle que tapée.
//
// Contrat : après chaque ajout accepté, le tampon est un PRÉFIXE VALIDE
// d'au moins une expression complète. Un ajout refusé ne touche à rien.
//
// Règles clés :
// - `)` puis chiffre ou `(`  => multiplication implicite `)×5`, `5×(`
// - deux opérateurs de suite => le second remplace le premier
// - `(` au plus autant que `)` … jamais l'inverse
// - `^` après un nombre négatif => signe retiré, négation différée sur `^`
//   (le moins unaire lie moins fort que la puissance : (-2)^2 = -(2^2))

use super::erreurs::ErreurCalcul;
use super::jetons::{compter_parentheses, Nombre, Op, Tok};

/// Granularité de l'effacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularite {
    /// Dernier caractère d'un nombre multi-caractères, sinon le dernier jeton.
    Caractere,
    Jeton,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tampon {
    jetons: Vec<Tok>,
}

fn refus<T>(raison: &'static str) -> Result<T, ErreurCalcul> {
    Err(ErreurCalcul::AjoutInvalide(raison))
}

impl Tampon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jetons(&self) -> &[Tok] {
        &self.jetons
    }

    pub fn est_vide(&self) -> bool {
        self.jetons.is_empty()
    }

    /// `(` encore ouvertes.
    pub fn parentheses_ouvertes(&self) -> usize {
        let (o, c) = compter_parentheses(&self.jetons);
        o.saturating_sub(c)
    }

    /* ------------------------ Ajouts ------------------------ */

    pub fn push_chiffre(&mut self, d: u8) -> Result<(), ErreurCalcul> {
        if d > 9 {
            return refus("chiffre hors 0-9");
        }
        match self.jetons.last_mut() {
            Some(Tok::Num(n)) => n.pousser_chiffre(d),
            Some(Tok::RPar) => {
                self.jetons.push(Tok::Op(Op::Star));
                self.jetons.push(Tok::Num(Nombre::depuis_chiffre(d)));
            }
            _ => self.jetons.push(Tok::Num(Nombre::depuis_chiffre(d))),
        }
        Ok(())
    }

    /// Touche `( )` unique : ferme s'il reste une `(` et qu'une valeur vient
    /// d'être fermée, sinon ouvre (avec `×` implicite après une valeur).
    pub fn push_parenthese(&mut self) -> Result<(), ErreurCalcul> {
        let fermer = self.jetons.last().is_some_and(Tok::ferme_une_valeur)
            && self.parentheses_ouvertes() > 0;
        if fermer {
            self.push_fermante()
        } else {
            self.push_ouvrante()
        }
    }

    pub fn push_ouvrante(&mut self) -> Result<(), ErreurCalcul> {
        match self.jetons.last() {
            Some(Tok::Num(n)) if n.point_en_suspens() => return refus("virgule en suspens"),
            Some(Tok::Num(_)) | Some(Tok::RPar) => self.jetons.push(Tok::Op(Op::Star)),
            None | Some(Tok::LPar) | Some(Tok::Op(_)) => {}
        }
        self.jetons.push(Tok::LPar);
        Ok(())
    }

    pub fn push_fermante(&mut self) -> Result<(), ErreurCalcul> {
        if self.parentheses_ouvertes() == 0 {
            return refus("aucune parenthèse à fermer");
        }
        if !self.jetons.last().is_some_and(Tok::ferme_une_valeur) {
            return refus("rien à fermer");
        }
        self.jetons.push(Tok::RPar);
        Ok(())
    }

    pub fn push_operateur(&mut self, op: Op) -> Result<(), ErreurCalcul> {
        match self.jetons.last() {
            None => refus("tampon vide"),
            Some(Tok::LPar) => refus("opérateur après `(`"),
            Some(Tok::Num(n)) if n.point_en_suspens() => refus("virgule en suspens"),
            Some(Tok::Op(_)) => {
                // dernier appui gagnant
                if let Some(ancien) = self.jetons.pop() {
                    self.restaurer_base(&ancien);
                }
                self.pousser_operateur(op);
                Ok(())
            }
            Some(Tok::Num(_)) | Some(Tok::RPar) => {
                self.pousser_operateur(op);
                Ok(())
            }
        }
    }

    pub fn push_virgule(&mut self) -> Result<(), ErreurCalcul> {
        match self.jetons.last_mut() {
            Some(Tok::Num(n)) if n.contient_point() => refus("déjà une virgule"),
            Some(Tok::Num(n)) => {
                n.pousser_point();
                Ok(())
            }
            _ => refus("pas de nombre en cours"),
        }
    }

    pub fn inverser_signe(&mut self) -> Result<(), ErreurCalcul> {
        match self.jetons.last_mut() {
            Some(Tok::Num(n)) => {
                n.inverser_signe();
                Ok(())
            }
            _ => refus("pas de nombre en cours"),
        }
    }

    /* ------------------------ Effacements ------------------------ */

    pub fn effacer(&mut self, granularite: Granularite) -> Result<(), ErreurCalcul> {
        if granularite == Granularite::Caractere {
            if let Some(Tok::Num(n)) = self.jetons.last_mut() {
                if n.longueur() > 1 {
                    n.retirer_caractere();
                    return Ok(());
                }
            }
        }
        match self.jetons.pop() {
            Some(retire) => {
                self.restaurer_base(&retire);
                Ok(())
            }
            None => refus("tampon vide"),
        }
    }

    pub fn clear(&mut self) {
        self.jetons.clear();
    }

    /* ------------------------ Fin de saisie ------------------------ */

    /// Le tampon peut-il être évalué tel quel ?
    pub fn verifier_terminable(&self) -> Result<(), ErreurCalcul> {
        let termine = match self.jetons.last() {
            None | Some(Tok::LPar) | Some(Tok::Op(_)) => false,
            Some(Tok::Num(n)) => !n.point_en_suspens(),
            Some(Tok::RPar) => true,
        };
        if !termine || self.parentheses_ouvertes() > 0 {
            return Err(ErreurCalcul::ExpressionIncomplete);
        }
        Ok(())
    }

    /// Après `=` : le tampon ne contient plus que le résultat.
    pub fn remplacer_par(&mut self, resultat: Nombre) {
        self.jetons = vec![Tok::Num(resultat)];
    }

    /* ------------------------ Signe autour de `^` ------------------------ */

    fn pousser_operateur(&mut self, op: Op) {
        let op = match op {
            Op::Caret { .. } => {
                let negation_differee = match self.jetons.last_mut() {
                    Some(Tok::Num(base)) if base.est_negatif() => {
                        base.inverser_signe();
                        true
                    }
                    _ => false,
                };
                Op::Caret { negation_differee }
            }
            autre => autre,
        };
        self.jetons.push(Tok::Op(op));
    }

    /// Un `^` qui portait la négation de sa base disparaît : la base retrouve son signe.
    fn restaurer_base(&mut self, retire: &Tok) {
        if let Tok::Op(Op::Caret {
            negation_differee: true,
        }) = retire
        {
            if let Some(Tok::Num(base)) = self.jetons.last_mut() {
                base.inverser_signe();
            }
        }
    }
}
