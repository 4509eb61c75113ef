//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur du noyau et l'écran qu'il alimente, et offrir
//! des actions "boutons" qui ne font que relayer vers le moteur.
//!
//! Contrats :
//! - Aucune règle de saisie ici : tout est décidé par le noyau.
//! - L'écran ne fait qu'enregistrer ce que le moteur lui envoie.

use crate::noyau::{format_tokens, Affichage, ErreurCalcul, Granularite, Moteur, Op, Reglages};

/// Décimales affichées au démarrage (l'écran est étroit).
const DECIMALES_ECRAN: usize = 8;

/// Écran : reçoit chaque rendu du moteur.
#[derive(Clone, Debug)]
pub struct Ecran {
    pub texte: String,
    /// Message transitoire (vidé à la touche suivante).
    pub erreur: String,
}

impl Default for Ecran {
    fn default() -> Self {
        Self {
            texte: "0".to_string(),
            erreur: String::new(),
        }
    }
}

impl Affichage for Ecran {
    fn afficher(&mut self, texte: &str) {
        self.texte.clear();
        self.texte.push_str(texte);
    }

    fn signaler(&mut self, erreur: &ErreurCalcul) {
        // un refus de touche n'est pas une erreur à montrer
        if !matches!(erreur, ErreurCalcul::AjoutInvalide(_)) {
            self.erreur = erreur.to_string();
        }
    }
}

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Une touche du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Operateur(Op),
    Parenthese,
    Ouvrante,
    Fermante,
    Virgule,
    Signe,
    Effacer(Granularite),
    Clear,
    Egal,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: Moteur<Ecran>,
    pub demarche: Demarche,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: Moteur::avec_reglages(
                Ecran::default(),
                Reglages::default().avec_decimales(DECIMALES_ECRAN),
            ),
            demarche: Demarche::default(),
        }
    }
}

impl AppCalc {
    pub fn ecran(&self) -> &Ecran {
        self.moteur.affichage()
    }

    /// Relaye une touche au moteur. Les refus sont silencieux (déjà journalisés).
    pub fn appuyer(&mut self, touche: Touche) {
        self.moteur.affichage_mut().erreur.clear();

        let _ = match touche {
            Touche::Chiffre(d) => self.moteur.push_chiffre(d),
            Touche::Operateur(op) => self.moteur.push_operateur(op),
            Touche::Parenthese => self.moteur.push_parenthese(),
            Touche::Ouvrante => self.moteur.push_ouvrante(),
            Touche::Fermante => self.moteur.push_fermante(),
            Touche::Virgule => self.moteur.push_virgule(),
            Touche::Signe => self.moteur.inverser_signe(),
            Touche::Effacer(g) => self.moteur.effacer(g),
            Touche::Clear => {
                // second appui sur un tampon déjà vide : on efface aussi la démarche
                if self.moteur.tampon().est_vide() {
                    self.demarche = Demarche::default();
                }
                self.moteur.clear();
                Ok(())
            }
            Touche::Egal => self.egal(),
        };
    }

    fn egal(&mut self) -> Result<(), ErreurCalcul> {
        let jetons = format_tokens(self.moteur.tampon().jetons());
        let eval = self.moteur.finaliser()?;
        self.demarche = Demarche {
            jetons,
            rpn: format_tokens(&eval.postfixe),
        };
        Ok(())
    }

    /// Décimales du résultat (bornées par les réglages).
    pub fn set_decimales(&mut self, decimales: usize) {
        self.moteur.reglages_mut().set_decimales(decimales);
    }
}
