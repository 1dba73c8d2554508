//! Contextual shaping of Arabic script into presentation forms.
//!
//! Every letter is replaced by the codepoint of its isolated, initial, medial or final form, so a
//! renderer that places glyphs one codepoint at a time still draws joined text. The joining
//! behaviour of each character comes from the Unicode joining type tables.
use unicode_joining_type::{ get_joining_type, JoiningType };

#[derive(Debug,Clone,Copy,PartialEq)]
pub enum GlyphLocation {
    Isolated,
    Initial,
    Medial,
    Final,
}

impl GlyphLocation {
    fn from_joins(joins_previous: bool, joins_next: bool) -> Self {
        match (joins_previous, joins_next) {
            (false, false) => GlyphLocation::Isolated,
            (false, true) => GlyphLocation::Initial,
            (true, true) => GlyphLocation::Medial,
            (true, false) => GlyphLocation::Final,
        }
    }
}

#[derive(Debug,Clone,Copy)]
pub struct ShapingOptions {
    /// drop diacritics (fatha, kasra, shadda...) instead of keeping them as combining marks
    pub delete_harakat: bool,
    /// replace lam followed by alef with the lam-alef ligature
    pub ligatures: bool,
}

impl Default for ShapingOptions {
    fn default() -> Self {
        ShapingOptions {
            delete_harakat: true,
            ligatures: true,
        }
    }
}

/// (letter, isolated, final, initial, medial); right joining letters have no initial/medial form
const FORMS: &[(char, char, char, Option<char>, Option<char>)] = &[
    ('\u{0621}', '\u{FE80}', '\u{FE80}', None, None),
    ('\u{0622}', '\u{FE81}', '\u{FE82}', None, None),
    ('\u{0623}', '\u{FE83}', '\u{FE84}', None, None),
    ('\u{0624}', '\u{FE85}', '\u{FE86}', None, None),
    ('\u{0625}', '\u{FE87}', '\u{FE88}', None, None),
    ('\u{0626}', '\u{FE89}', '\u{FE8A}', Some('\u{FE8B}'), Some('\u{FE8C}')),
    ('\u{0627}', '\u{FE8D}', '\u{FE8E}', None, None),
    ('\u{0628}', '\u{FE8F}', '\u{FE90}', Some('\u{FE91}'), Some('\u{FE92}')),
    ('\u{0629}', '\u{FE93}', '\u{FE94}', None, None),
    ('\u{062A}', '\u{FE95}', '\u{FE96}', Some('\u{FE97}'), Some('\u{FE98}')),
    ('\u{062B}', '\u{FE99}', '\u{FE9A}', Some('\u{FE9B}'), Some('\u{FE9C}')),
    ('\u{062C}', '\u{FE9D}', '\u{FE9E}', Some('\u{FE9F}'), Some('\u{FEA0}')),
    ('\u{062D}', '\u{FEA1}', '\u{FEA2}', Some('\u{FEA3}'), Some('\u{FEA4}')),
    ('\u{062E}', '\u{FEA5}', '\u{FEA6}', Some('\u{FEA7}'), Some('\u{FEA8}')),
    ('\u{062F}', '\u{FEA9}', '\u{FEAA}', None, None),
    ('\u{0630}', '\u{FEAB}', '\u{FEAC}', None, None),
    ('\u{0631}', '\u{FEAD}', '\u{FEAE}', None, None),
    ('\u{0632}', '\u{FEAF}', '\u{FEB0}', None, None),
    ('\u{0633}', '\u{FEB1}', '\u{FEB2}', Some('\u{FEB3}'), Some('\u{FEB4}')),
    ('\u{0634}', '\u{FEB5}', '\u{FEB6}', Some('\u{FEB7}'), Some('\u{FEB8}')),
    ('\u{0635}', '\u{FEB9}', '\u{FEBA}', Some('\u{FEBB}'), Some('\u{FEBC}')),
    ('\u{0636}', '\u{FEBD}', '\u{FEBE}', Some('\u{FEBF}'), Some('\u{FEC0}')),
    ('\u{0637}', '\u{FEC1}', '\u{FEC2}', Some('\u{FEC3}'), Some('\u{FEC4}')),
    ('\u{0638}', '\u{FEC5}', '\u{FEC6}', Some('\u{FEC7}'), Some('\u{FEC8}')),
    ('\u{0639}', '\u{FEC9}', '\u{FECA}', Some('\u{FECB}'), Some('\u{FECC}')),
    ('\u{063A}', '\u{FECD}', '\u{FECE}', Some('\u{FECF}'), Some('\u{FED0}')),
    ('\u{0641}', '\u{FED1}', '\u{FED2}', Some('\u{FED3}'), Some('\u{FED4}')),
    ('\u{0642}', '\u{FED5}', '\u{FED6}', Some('\u{FED7}'), Some('\u{FED8}')),
    ('\u{0643}', '\u{FED9}', '\u{FEDA}', Some('\u{FEDB}'), Some('\u{FEDC}')),
    ('\u{0644}', '\u{FEDD}', '\u{FEDE}', Some('\u{FEDF}'), Some('\u{FEE0}')),
    ('\u{0645}', '\u{FEE1}', '\u{FEE2}', Some('\u{FEE3}'), Some('\u{FEE4}')),
    ('\u{0646}', '\u{FEE5}', '\u{FEE6}', Some('\u{FEE7}'), Some('\u{FEE8}')),
    ('\u{0647}', '\u{FEE9}', '\u{FEEA}', Some('\u{FEEB}'), Some('\u{FEEC}')),
    ('\u{0648}', '\u{FEED}', '\u{FEEE}', None, None),
    ('\u{0649}', '\u{FEEF}', '\u{FEF0}', Some('\u{FBE8}'), Some('\u{FBE9}')),
    ('\u{064A}', '\u{FEF1}', '\u{FEF2}', Some('\u{FEF3}'), Some('\u{FEF4}')),
    // Persian letters live in Presentation Forms-A
    ('\u{067E}', '\u{FB56}', '\u{FB57}', Some('\u{FB58}'), Some('\u{FB59}')),
    ('\u{0686}', '\u{FB7A}', '\u{FB7B}', Some('\u{FB7C}'), Some('\u{FB7D}')),
    ('\u{0698}', '\u{FB8A}', '\u{FB8B}', None, None),
    ('\u{06A9}', '\u{FB8E}', '\u{FB8F}', Some('\u{FB90}'), Some('\u{FB91}')),
    ('\u{06AF}', '\u{FB92}', '\u{FB93}', Some('\u{FB94}'), Some('\u{FB95}')),
    ('\u{06C0}', '\u{FBA4}', '\u{FBA5}', None, None),
    ('\u{06CC}', '\u{FBFC}', '\u{FBFD}', Some('\u{FBFE}'), Some('\u{FBFF}')),
];

/// (alef variant, isolated lam-alef, final lam-alef)
const LAM_ALEF: &[(char, char, char)] = &[
    ('\u{0622}', '\u{FEF5}', '\u{FEF6}'),
    ('\u{0623}', '\u{FEF7}', '\u{FEF8}'),
    ('\u{0625}', '\u{FEF9}', '\u{FEFA}'),
    ('\u{0627}', '\u{FEFB}', '\u{FEFC}'),
];

const LAM: char = '\u{0644}';

/// presentation form of `ch` at `location`, or `ch` itself when it has none
pub fn presentation_form(ch: char, location: GlyphLocation) -> char {
    let Some(&(_, isolated, final_form, initial, medial)) = FORMS.iter().find(|form| form.0 == ch) else {
        return ch;
    };

    match location {
        GlyphLocation::Isolated => isolated,
        GlyphLocation::Final => final_form,
        GlyphLocation::Initial => initial.unwrap_or(isolated),
        GlyphLocation::Medial => medial.unwrap_or(final_form),
    }
}

/// Arabic diacritics plus the superscript alef
pub fn is_haraka(ch: char) -> bool {
    matches!(ch, '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{06D6}'..='\u{06ED}')
}

fn joins_forward(joining_type: JoiningType) -> bool {
    matches!(joining_type, JoiningType::DualJoining | JoiningType::LeftJoining | JoiningType::JoinCausing)
}

fn joins_backward(joining_type: JoiningType) -> bool {
    matches!(joining_type, JoiningType::DualJoining | JoiningType::RightJoining | JoiningType::JoinCausing)
}

/// the joining location of every character in logical order; transparent characters stay isolated
pub fn compute_joining(chars: &[char]) -> Vec<GlyphLocation> {
    let types: Vec<JoiningType> = chars.iter().map(|ch| get_joining_type(*ch)).collect();
    let mut locations = vec![GlyphLocation::Isolated; chars.len()];

    for (index, joining_type) in types.iter().enumerate() {
        if *joining_type == JoiningType::Transparent {
            continue;
        }

        let previous = types[..index]
            .iter()
            .rev()
            .find(|t| **t != JoiningType::Transparent);

        let next = types[index + 1..]
            .iter()
            .find(|t| **t != JoiningType::Transparent);

        let joins_previous = joins_backward(*joining_type) && previous.is_some_and(|t| joins_forward(*t));
        let joins_next = joins_forward(*joining_type) && next.is_some_and(|t| joins_backward(*t));

        locations[index] = GlyphLocation::from_joins(joins_previous, joins_next);
    }

    locations
}

/// Replaces Arabic letters in `text` with their contextual presentation forms. Logical order is kept.
pub fn reshape(text: &str, options: &ShapingOptions) -> String {
    let chars: Vec<char> = text
        .chars()
        .filter(|ch| !(options.delete_harakat && is_haraka(*ch)))
        .collect();

    let locations = compute_joining(&chars);
    let mut shaped = String::with_capacity(text.len());
    let mut index = 0;

    while index < chars.len() {
        let ch = chars[index];
        let location = locations[index];

        if options.ligatures && ch == LAM {
            let ligature = chars
                .get(index + 1)
                .and_then(|alef| LAM_ALEF.iter().find(|(variant, _, _)| variant == alef));

            if let Some(&(_, isolated, final_form)) = ligature {
                // the ligature is right joining: it only keeps the lam's link to the previous letter
                let joined = matches!(location, GlyphLocation::Medial | GlyphLocation::Final);
                shaped.push(if joined { final_form } else { isolated });
                index += 2;
                continue;
            }
        }

        shaped.push(presentation_form(ch, location));
        index += 1;
    }

    shaped
}

/// Maps presentation forms back to the letters they came from; lam-alef ligatures become two letters.
pub fn unshape(text: &str) -> String {
    let mut letters = String::with_capacity(text.len());

    for ch in text.chars() {
        if let Some(&(alef, _, _)) = LAM_ALEF.iter().find(|(_, isolated, final_form)| *isolated == ch || *final_form == ch) {
            letters.push(LAM);
            letters.push(alef);
            continue;
        }

        let base = FORMS
            .iter()
            .find(|(_, isolated, final_form, initial, medial)| {
                *isolated == ch || *final_form == ch || *initial == Some(ch) || *medial == Some(ch)
            })
            .map(|form| form.0)
            .unwrap_or(ch);

        letters.push(base);
    }

    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(text: &str) -> String {
        reshape(text, &ShapingOptions::default())
    }

    #[test]
    fn dual_joining_pair() {
        // beh beh -> initial beh, final beh
        assert_eq!(shape("\u{0628}\u{0628}"), "\u{FE91}\u{FE90}");
    }

    #[test]
    fn medial_form_between_two_joiners() {
        assert_eq!(shape("\u{0628}\u{0628}\u{0628}"), "\u{FE91}\u{FE92}\u{FE90}");
    }

    #[test]
    fn right_joining_letter_breaks_the_chain() {
        // beh alef beh: alef only joins backwards, so the last beh is isolated
        assert_eq!(shape("\u{0628}\u{0627}\u{0628}"), "\u{FE91}\u{FE8E}\u{FE8F}");
    }

    #[test]
    fn persian_letters_use_forms_a() {
        // "پک"
        assert_eq!(shape("\u{067E}\u{06A9}"), "\u{FB58}\u{FB8F}");
    }

    #[test]
    fn zwnj_prevents_joining() {
        // "شکل‌گیری" keeps the ZWNJ and the lam before it stays final
        let shaped = shape("\u{0644}\u{200C}\u{06AF}");
        assert_eq!(shaped, "\u{FEDD}\u{200C}\u{FB92}");
    }

    #[test]
    fn lam_alef_ligature() {
        assert_eq!(shape("\u{0644}\u{0627}"), "\u{FEFB}");
        // beh lam alef: the ligature takes its final form
        assert_eq!(shape("\u{0628}\u{0644}\u{0627}"), "\u{FE91}\u{FEFC}");
    }

    #[test]
    fn ligatures_can_be_disabled() {
        let options = ShapingOptions { ligatures: false, ..ShapingOptions::default() };
        assert_eq!(reshape("\u{0644}\u{0627}", &options), "\u{FEDF}\u{FE8E}");
    }

    #[test]
    fn harakat_are_dropped_or_kept() {
        let text = "\u{0628}\u{064E}\u{0628}";
        assert_eq!(shape(text), "\u{FE91}\u{FE90}");

        let keep = ShapingOptions { delete_harakat: false, ..ShapingOptions::default() };
        // the fatha is transparent and does not break the join
        assert_eq!(reshape(text, &keep), "\u{FE91}\u{064E}\u{FE90}");
    }

    #[test]
    fn unshape_undoes_reshape() {
        let text = "\u{0628}\u{0644}\u{0627} \u{067E}\u{06A9}\u{06CC}";
        assert_eq!(unshape(&shape(text)), text);
    }

    #[test]
    fn latin_and_digits_pass_through() {
        assert_eq!(shape("abc ۱۲۳ 11"), "abc ۱۲۳ 11");
    }
}
