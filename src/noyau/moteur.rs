//! Moteur d'expression : tampon + affichage + réglages.
//!
//! Chaque opération publique suit le même ordre : validation, mutation,
//! puis notification de l'affichage. Une opération refusée ne change pas
//! le tampon mais ré-affiche quand même.
//!
//! Erreurs de `finaliser` :
//! - incomplète : message "Expression invalide" affiché puis aussitôt retiré
//!   (ré-affichage du tampon intact)
//! - division par zéro / non fini : message affiché, tampon conservé

use tracing::{debug, trace};

use super::erreurs::ErreurCalcul;
use super::eval::{evaluer, Evaluation};
use super::format::format_tampon;
use super::jetons::{Nombre, Op};
use super::reglages::Reglages;
use super::tampon::{Granularite, Tampon};

/// Ce dont le moteur a besoin de son hôte : un endroit où écrire.
pub trait Affichage {
    /// Appelé après chaque opération. Doit être idempotent.
    fn afficher(&mut self, texte: &str);

    /// Canal d'erreur optionnel (message transitoire côté hôte).
    fn signaler(&mut self, _erreur: &ErreurCalcul) {}
}

impl<F: FnMut(&str)> Affichage for F {
    fn afficher(&mut self, texte: &str) {
        self(texte)
    }
}

#[derive(Clone, Debug)]
pub struct Moteur<A: Affichage> {
    tampon: Tampon,
    affichage: A,
    reglages: Reglages,
}

impl<A: Affichage> Moteur<A> {
    pub fn new(affichage: A) -> Self {
        Self::avec_reglages(affichage, Reglages::default())
    }

    pub fn avec_reglages(affichage: A, reglages: Reglages) -> Self {
        Self {
            tampon: Tampon::new(),
            affichage,
            reglages,
        }
    }

    pub fn tampon(&self) -> &Tampon {
        &self.tampon
    }

    pub fn affichage(&self) -> &A {
        &self.affichage
    }

    pub fn affichage_mut(&mut self) -> &mut A {
        &mut self.affichage
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    pub fn reglages_mut(&mut self) -> &mut Reglages {
        &mut self.reglages
    }

    /// Texte du tampon courant ("0" si vide).
    pub fn texte(&self) -> String {
        format_tampon(self.tampon.jetons())
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn push_chiffre(&mut self, d: u8) -> Result<(), ErreurCalcul> {
        let r = self.tampon.push_chiffre(d);
        self.conclure(r)
    }

    pub fn push_operateur(&mut self, op: Op) -> Result<(), ErreurCalcul> {
        let r = self.tampon.push_operateur(op);
        self.conclure(r)
    }

    /// Touche `( )` contextuelle.
    pub fn push_parenthese(&mut self) -> Result<(), ErreurCalcul> {
        let r = self.tampon.push_parenthese();
        self.conclure(r)
    }

    pub fn push_ouvrante(&mut self) -> Result<(), ErreurCalcul> {
        let r = self.tampon.push_ouvrante();
        self.conclure(r)
    }

    pub fn push_fermante(&mut self) -> Result<(), ErreurCalcul> {
        let r = self.tampon.push_fermante();
        self.conclure(r)
    }

    pub fn push_virgule(&mut self) -> Result<(), ErreurCalcul> {
        let r = self.tampon.push_virgule();
        self.conclure(r)
    }

    pub fn inverser_signe(&mut self) -> Result<(), ErreurCalcul> {
        let r = self.tampon.inverser_signe();
        self.conclure(r)
    }

    pub fn effacer(&mut self, granularite: Granularite) -> Result<(), ErreurCalcul> {
        let r = self.tampon.effacer(granularite);
        self.conclure(r)
    }

    pub fn clear(&mut self) {
        self.tampon.clear();
        self.rafraichir();
    }

    /* ------------------------ `=` ------------------------ */

    pub fn finaliser(&mut self) -> Result<Evaluation, ErreurCalcul> {
        if let Err(e) = self.tampon.verifier_terminable() {
            debug!(tampon = %self.texte(), "expression incomplète");
            self.affichage.signaler(&e);
            self.affichage.afficher(&self.reglages.message_invalide);
            self.rafraichir();
            return Err(e);
        }

        match evaluer(self.tampon.jetons(), &self.reglages) {
            Ok(eval) => {
                self.tampon
                    .remplacer_par(Nombre::depuis_litteral(eval.litteral.clone()));
                self.affichage.afficher(&eval.texte);
                Ok(eval)
            }
            Err(e) => {
                debug!(tampon = %self.texte(), erreur = %e, "évaluation refusée");
                self.affichage.signaler(&e);
                self.affichage.afficher(&e.to_string());
                Err(e)
            }
        }
    }

    fn conclure(&mut self, r: Result<(), ErreurCalcul>) -> Result<(), ErreurCalcul> {
        match &r {
            Ok(()) => trace!(tampon = %self.texte(), "jeton accepté"),
            Err(e) => {
                debug!(tampon = %self.texte(), erreur = %e, "jeton refusé");
                self.affichage.signaler(e);
            }
        }
        self.rafraichir();
        r
    }

    fn rafraichir(&mut self) {
        let texte = self.texte();
        self.affichage.afficher(&texte);
    }
}
