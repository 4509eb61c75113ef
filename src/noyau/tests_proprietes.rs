//! Propriétés du moteur, vues depuis l'extérieur (touches -> affichage).
//!
//! Les touches sont décrites par une petite chaîne :
//! - `0-9` chiffre, `.` virgule, `~` signe
//! - `+ - * / ^` opérateurs
//! - `(` / `)` ouvrante / fermante explicites, `p` touche `( )` contextuelle
//! - `<` effacer caractère, `{` effacer jeton

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::erreurs::ErreurCalcul;
use super::jetons::{Nombre, Op, Tok};
use super::moteur::{Affichage, Moteur};
use super::reglages::Reglages;
use super::tampon::Granularite;
use super::test_utils::init_test_logging;

#[derive(Debug, Default)]
struct Journal {
    rendus: Vec<String>,
    erreurs: Vec<ErreurCalcul>,
}

impl Affichage for Journal {
    fn afficher(&mut self, texte: &str) {
        self.rendus.push(texte.to_string());
    }

    fn signaler(&mut self, erreur: &ErreurCalcul) {
        self.erreurs.push(erreur.clone());
    }
}

fn moteur() -> Moteur<Journal> {
    Moteur::new(Journal::default())
}

fn op_de(c: char) -> Option<Op> {
    match c {
        '+' => Some(Op::Plus),
        '-' => Some(Op::Minus),
        '*' => Some(Op::Star),
        '/' => Some(Op::Slash),
        '^' => Some(Op::POW),
        _ => None,
    }
}

fn taper(m: &mut Moteur<Journal>, touches: &str) {
    for c in touches.chars() {
        let _ = match c {
            '0'..='9' => m.push_chiffre(c as u8 - b'0'),
            '.' => m.push_virgule(),
            '~' => m.inverser_signe(),
            '(' => m.push_ouvrante(),
            ')' => m.push_fermante(),
            'p' => m.push_parenthese(),
            '<' => m.effacer(Granularite::Caractere),
            '{' => m.effacer(Granularite::Jeton),
            _ => match op_de(c) {
                Some(op) => m.push_operateur(op),
                None => panic!("touche inconnue {c:?}"),
            },
        };
    }
}

fn resultat(touches: &str) -> Result<f64, ErreurCalcul> {
    let mut m = moteur();
    taper(&mut m, touches);
    m.finaliser().map(|e| e.valeur)
}

fn dernier_rendu(m: &Moteur<Journal>) -> &str {
    m.affichage()
        .rendus
        .last()
        .map(String::as_str)
        .unwrap_or_default()
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn precedence_multiplication_avant_addition() {
    init_test_logging();
    assert_eq!(resultat("3+4*2"), Ok(11.0));
}

#[test]
fn parentheses_evaluees_d_abord() {
    assert_eq!(resultat("(3+4)*2"), Ok(14.0));
}

#[test]
fn puissance_gauche_a_droite_par_defaut() {
    assert_eq!(resultat("2^3^2"), Ok(64.0));
}

#[test]
fn puissance_associative_droite_en_option() {
    let reglages = Reglages::default().avec_puissance_associative_droite(true);
    let mut m = Moteur::avec_reglages(Journal::default(), reglages);
    taper(&mut m, "2^3^2");
    assert_eq!(m.finaliser().map(|e| e.valeur), Ok(512.0));
}

#[test]
fn moins_unaire_lie_moins_fort_que_puissance() {
    assert_eq!(resultat("2~^2"), Ok(-4.0));
    assert_eq!(resultat("3*2~^2"), Ok(-12.0));
    assert_eq!(resultat("2^2~"), Ok(0.25));
}

#[test]
fn multiplication_implicite() {
    // (2)(3) avec la seule touche `( )`
    assert_eq!(resultat("p2pp3p"), Ok(6.0));
    // (1+1)5
    assert_eq!(resultat("(1+1)5"), Ok(10.0));
}

#[test]
fn decimales_et_bruit_binaire() {
    let mut m = moteur();
    taper(&mut m, ".1");
    // virgule refusée sans nombre en cours
    assert_eq!(m.texte(), "1");

    let mut m = moteur();
    taper(&mut m, "0.1+0.2");
    let e = m.finaliser().unwrap();
    assert_eq!(e.texte, "0.3");
    assert_eq!(dernier_rendu(&m), "0.3");
}

#[test]
fn resultat_remplace_le_tampon_et_reste_editable() {
    let mut m = moteur();
    taper(&mut m, "9-2*3");
    m.finaliser().unwrap();
    assert_eq!(
        m.tampon().jetons(),
        &[Tok::Num(Nombre::depuis_litteral("3"))]
    );
    taper(&mut m, "4+1");
    assert_eq!(m.texte(), "34+1");
    assert_eq!(m.finaliser().map(|e| e.valeur), Ok(35.0));
}

#[test]
fn resultat_negatif_affiche_sans_parentheses() {
    let mut m = moteur();
    taper(&mut m, "2-5");
    m.finaliser().unwrap();
    assert_eq!(dernier_rendu(&m), "-3");
    // dans le tampon il se lit comme un nombre négatif
    taper(&mut m, "+");
    assert_eq!(m.texte(), "(-3)+");
}

#[test]
fn resultat_enchaine_sans_derive() {
    let mut m = moteur();
    taper(&mut m, "1/3");
    m.finaliser().unwrap();
    assert_eq!(dernier_rendu(&m), "0.3333333333");
    taper(&mut m, "*3");
    assert_eq!(m.finaliser().map(|e| e.valeur), Ok(1.0));
    assert_eq!(dernier_rendu(&m), "1");
}

#[test]
fn petit_resultat_ni_arrondi_a_zero_ni_perdu() {
    let mut m = moteur();
    taper(&mut m, "1/1000000000000");
    m.finaliser().unwrap();
    assert_eq!(dernier_rendu(&m), "0.000000000001");
    assert_eq!(
        m.tampon().jetons(),
        &[Tok::Num(Nombre::depuis_litteral("0.000000000001"))]
    );
    taper(&mut m, "*2");
    assert_eq!(m.finaliser().map(|e| e.valeur), Ok(2e-12));
}

#[test]
fn base_negative_visible_avant_l_exposant() {
    let mut m = moteur();
    taper(&mut m, "2~^");
    assert_eq!(m.texte(), "(-2)^");
    taper(&mut m, "3");
    assert_eq!(m.texte(), "(-2)^3");
    assert_eq!(m.finaliser().map(|e| e.valeur), Ok(-8.0));
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn division_par_zero_conserve_le_tampon() {
    let mut m = moteur();
    taper(&mut m, "8/(2-2)");
    let avant = m.tampon().clone();
    assert_eq!(m.finaliser(), Err(ErreurCalcul::DivisionParZero));
    assert_eq!(m.tampon(), &avant);
    assert_eq!(dernier_rendu(&m), "division par zéro");
    assert_eq!(m.affichage().erreurs, vec![ErreurCalcul::DivisionParZero]);

    // toujours éditable
    taper(&mut m, "{{1)");
    assert_eq!(m.finaliser().map(|e| e.valeur), Ok(8.0));
}

#[test]
fn division_par_zero_litteral() {
    let mut m = moteur();
    taper(&mut m, "5/0");
    let avant = m.tampon().clone();
    assert_eq!(m.finaliser(), Err(ErreurCalcul::DivisionParZero));
    assert_eq!(m.tampon(), &avant);
}

#[test]
fn litteral_trop_long_refuse_sans_perdre_le_tampon() {
    let mut m = moteur();
    taper(&mut m, &"9".repeat(320));
    let avant = m.tampon().clone();
    assert_eq!(m.finaliser(), Err(ErreurCalcul::ResultatNonFini));
    assert_eq!(m.tampon(), &avant);
    assert_eq!(dernier_rendu(&m), "résultat non représentable");

    // toujours éditable
    taper(&mut m, "{5+1");
    assert_eq!(m.finaliser().map(|e| e.valeur), Ok(6.0));
}

#[test]
fn expression_incomplete_flash_puis_retour() {
    for touches in ["", "3+", "(", "(4", "4.", "2*(3"] {
        let mut m = moteur();
        taper(&mut m, touches);
        let avant = m.tampon().clone();
        let nb = m.affichage().rendus.len();

        assert_eq!(
            m.finaliser(),
            Err(ErreurCalcul::ExpressionIncomplete),
            "touches={touches:?}"
        );
        assert_eq!(m.tampon(), &avant);

        let rendus = &m.affichage().rendus[nb..];
        assert_eq!(rendus.len(), 2);
        assert_eq!(rendus[0], "Expression invalide");
        assert_eq!(rendus[1], m.texte());
    }
}

#[test]
fn message_invalide_configurable() {
    let reglages = Reglages::default().avec_message_invalide("Erreur");
    let mut m = Moteur::avec_reglages(Journal::default(), reglages);
    taper(&mut m, "7*");
    assert!(m.finaliser().is_err());
    let rendus = &m.affichage().rendus;
    assert_eq!(rendus[rendus.len() - 2], "Erreur");
    assert_eq!(rendus[rendus.len() - 1], "7×");
}

#[test]
fn ajout_refuse_reaffiche_quand_meme() {
    let mut m = moteur();
    assert!(m.push_operateur(Op::Plus).is_err());
    assert!(m.inverser_signe().is_err());
    assert!(m.push_fermante().is_err());
    assert_eq!(m.affichage().rendus, vec!["0", "0", "0"]);
    assert_eq!(m.affichage().erreurs.len(), 3);
}

#[test]
fn effacer_puis_clear() {
    let mut m = moteur();
    taper(&mut m, "12+34<");
    assert_eq!(m.texte(), "12+3");
    taper(&mut m, "{{");
    assert_eq!(m.texte(), "12");
    m.clear();
    m.clear();
    assert!(m.tampon().est_vide());
    assert_eq!(dernier_rendu(&m), "0");
}

/* ------------------------ Propriétés ------------------------ */

fn op_strategie() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Plus),
        Just(Op::Minus),
        Just(Op::Star),
        Just(Op::Slash),
        Just(Op::POW),
    ]
}

proptest! {
    #[test]
    fn chiffres_concatenes(chiffres in prop::collection::vec(0u8..=9, 1..16)) {
        let mut m = moteur();
        for d in &chiffres {
            m.push_chiffre(*d).unwrap();
        }
        let attendu: String = chiffres.iter().map(|d| char::from(b'0' + d)).collect();
        prop_assert_eq!(m.tampon().jetons(), &[Tok::Num(Nombre::depuis_litteral(attendu.clone()))]);
        prop_assert_eq!(m.texte(), attendu);
    }

    #[test]
    fn fermante_sans_ouvrante_sans_effet(
        termes in prop::collection::vec((1u8..=9, op_strategie()), 0..6),
        dernier in 0u8..=9,
    ) {
        let mut m = moteur();
        for (d, op) in termes {
            m.push_chiffre(d).unwrap();
            m.push_operateur(op).unwrap();
        }
        m.push_chiffre(dernier).unwrap();

        let avant = m.tampon().clone();
        prop_assert!(m.push_fermante().is_err());
        prop_assert_eq!(m.tampon(), &avant);
    }

    #[test]
    fn deux_operateurs_seul_le_second_reste(d in 1u8..=9, a in op_strategie(), b in op_strategie()) {
        let mut m = moteur();
        m.push_chiffre(d).unwrap();
        m.push_operateur(a).unwrap();
        m.push_operateur(b).unwrap();
        prop_assert_eq!(m.tampon().jetons().len(), 2);
        prop_assert_eq!(m.tampon().jetons().last(), Some(&Tok::Op(b)));
    }

    #[test]
    fn clear_idempotent(touches in "[0-9+*/^().~p<{-]{0,20}") {
        let mut m = moteur();
        taper(&mut m, &touches);
        m.clear();
        let une_fois = m.tampon().clone();
        m.clear();
        prop_assert!(une_fois.est_vide());
        prop_assert_eq!(m.tampon(), &une_fois);
    }
}
