// src/noyau/jetons.rs
//
// Jetons du tampon d'expression.
// Un nombre en cours de saisie garde son LITTÉRAL (chaîne) : on concatène des
// chiffres, on ne fait pas d'arithmétique pendant la frappe.
// La virgule en suspens (marqueur décimal) vit dans ce littéral : "12." .

use std::fmt;

/// Opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    /// `negation_differee` : la base était un nombre négatif entre parenthèses ;
    /// son signe a été retiré à la saisie et sera réappliqué au résultat de `^`.
    Caret { negation_differee: bool },
}

impl Op {
    /// `^` sans négation différée (celle-ci est posée par le tampon).
    pub const POW: Op = Op::Caret {
        negation_differee: false,
    };

    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Minus => 1,
            Op::Star | Op::Slash => 2,
            Op::Caret { .. } => 3,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Star => "×",
            Op::Slash => "/",
            Op::Caret { .. } => "^",
        }
    }

    pub fn est_puissance(self) -> bool {
        matches!(self, Op::Caret { .. })
    }
}

/// Littéral numérique : signe optionnel, chiffres, au plus un point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nombre {
    litteral: String,
}

impl Nombre {
    pub fn depuis_chiffre(d: u8) -> Self {
        Self {
            litteral: char::from(b'0' + d).to_string(),
        }
    }

    /// Construit depuis un littéral déjà validé (résultat formaté, tests).
    pub fn depuis_litteral(litteral: impl Into<String>) -> Self {
        Self {
            litteral: litteral.into(),
        }
    }

    pub fn litteral(&self) -> &str {
        &self.litteral
    }

    pub fn pousser_chiffre(&mut self, d: u8) {
        self.litteral.push(char::from(b'0' + d));
    }

    pub fn pousser_point(&mut self) {
        self.litteral.push('.');
    }

    pub fn contient_point(&self) -> bool {
        self.litteral.contains('.')
    }

    /// Marqueur décimal non résolu : "12." n'est pas encore un nombre terminé.
    pub fn point_en_suspens(&self) -> bool {
        self.litteral.ends_with('.')
    }

    pub fn est_negatif(&self) -> bool {
        self.litteral.starts_with('-')
    }

    /// Multiplie la valeur par −1 (sur le littéral, sans perte).
    pub fn inverser_signe(&mut self) {
        if self.est_negatif() {
            self.litteral.remove(0);
        } else {
            self.litteral.insert(0, '-');
        }
    }

    /// Nombre de caractères hors signe.
    pub fn longueur(&self) -> usize {
        self.litteral.trim_start_matches('-').chars().count()
    }

    /// Retire le dernier caractère (jamais le signe seul).
    pub fn retirer_caractere(&mut self) {
        if self.longueur() > 1 {
            self.litteral.pop();
        }
    }

    pub fn valeur(&self) -> Option<f64> {
        if self.point_en_suspens() {
            return None;
        }
        self.litteral.parse::<f64>().ok()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(Nombre),
    Op(Op),
    LPar,
    RPar,
}

impl Tok {
    /// Jeton après lequel une valeur est "fermée" (nombre ou `)`).
    pub fn ferme_une_valeur(&self) -> bool {
        matches!(self, Tok::Num(n) if !n.point_en_suspens()) || matches!(self, Tok::RPar)
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(n) if n.est_negatif() => write!(f, "({})", n.litteral()),
            Tok::Num(n) => f.write_str(n.litteral()),
            Tok::Op(op) => f.write_str(op.symbole()),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Compte `(` et `)` dans une suite de jetons.
pub fn compter_parentheses(tokens: &[Tok]) -> (usize, usize) {
    tokens.iter().fold((0, 0), |(o, c), t| match t {
        Tok::LPar => (o + 1, c),
        Tok::RPar => (o, c + 1),
        _ => (o, c),
    })
}

/// Format utilitaire (debug/"démarche") : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
