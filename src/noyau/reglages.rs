//! Réglages du moteur.
//!
//! Défense en profondeur : bornes sur les décimales (f64 n'en garantit pas plus de 15).

/// Décimales gardées par défaut quand un résultat redevient un littéral.
const DECIMALES_DEFAUT: usize = 10;

/// Garde-fou : au-delà, on n'affiche que du bruit binaire.
const DECIMALES_MAX: usize = 15;

const MESSAGE_INVALIDE_DEFAUT: &str = "Expression invalide";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub decimales: usize,

    /// false : `2^3^2 = (2^3)^2` (réduction gauche → droite).
    /// true  : `2^3^2 = 2^(3^2)` (convention mathématique).
    pub puissance_associative_droite: bool,

    pub message_invalide: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            puissance_associative_droite: false,
            message_invalide: MESSAGE_INVALIDE_DEFAUT.to_string(),
        }
    }
}

impl Reglages {
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.clamp(0, DECIMALES_MAX);
    }

    pub fn avec_decimales(mut self, decimales: usize) -> Self {
        self.set_decimales(decimales);
        self
    }

    pub fn avec_puissance_associative_droite(mut self, droite: bool) -> Self {
        self.puissance_associative_droite = droite;
        self
    }

    pub fn avec_message_invalide(mut self, msg: impl Into<String>) -> Self {
        self.message_invalide = msg.into();
        self
    }
}
