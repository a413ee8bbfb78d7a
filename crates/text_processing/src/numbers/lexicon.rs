//! Arabic number lexicon
//!
//! Static word tables consumed by the speller. The tables are built once
//! and never mutated; every index the block algorithm can produce (ones
//! 0-19, tens 20-90, hundreds 100-900, ordinals 1-10, scale positions 1-4)
//! is present, so a failed lookup is a bug rather than an input error.

use arabic_core::{Gender, GrammaticalCase};
use once_cell::sync::Lazy;

/// A lexicon word, optionally inflected for grammatical case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    Plain(&'static str),
    Cased {
        nominative: &'static str,
        accusative: &'static str,
    },
}

impl Word {
    pub fn form(&self, case: GrammaticalCase) -> &'static str {
        match (*self, case) {
            (Word::Plain(word), _) => word,
            (Word::Cased { nominative, .. }, GrammaticalCase::Nominative) => nominative,
            (Word::Cased { accusative, .. }, GrammaticalCase::Accusative) => accusative,
        }
    }
}

const fn plain(word: &'static str) -> Word {
    Word::Plain(word)
}

const fn cased(nominative: &'static str, accusative: &'static str) -> Word {
    Word::Cased {
        nominative,
        accusative,
    }
}

/// Masculine/feminine pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gendered<T> {
    pub masculine: T,
    pub feminine: T,
}

impl<T: Copy> Gendered<T> {
    pub fn get(&self, gender: Gender) -> T {
        match gender {
            Gender::Masculine => self.masculine,
            Gender::Feminine => self.feminine,
        }
    }
}

const fn gendered<T>(masculine: T, feminine: T) -> Gendered<T> {
    Gendered {
        masculine,
        feminine,
    }
}

/// Count-agreement forms of a power-of-1000 noun
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleWord {
    /// Dual, subject position (ألفان)
    pub dual_nominative: &'static str,
    /// Dual, object/genitive position (ألفين)
    pub dual_accusative: &'static str,
    /// Plural used after counts 3-10 (آلاف)
    pub plural: &'static str,
    /// Singular used alone for a count of one and after counts of 11+ (ألف)
    pub singular: &'static str,
}

impl ScaleWord {
    pub fn dual(&self, case: GrammaticalCase) -> &'static str {
        match case {
            GrammaticalCase::Nominative => self.dual_nominative,
            GrammaticalCase::Accusative => self.dual_accusative,
        }
    }
}

/// Latin digit to Arabic-Indic digit glyph (U+0660..U+0669)
pub const ARABIC_INDIC_DIGITS: [(char, char); 10] = [
    ('0', '٠'),
    ('1', '١'),
    ('2', '٢'),
    ('3', '٣'),
    ('4', '٤'),
    ('5', '٥'),
    ('6', '٦'),
    ('7', '٧'),
    ('8', '٨'),
    ('9', '٩'),
];

static LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::build);

/// Word tables for spelling numbers
#[derive(Debug)]
pub struct Lexicon {
    /// 0..=19
    cardinal_ones: [Gendered<Word>; 20],
    /// 20, 30, .., 90
    tens: [Word; 8],
    /// 100, 200, .., 900
    hundreds: [Word; 9],
    /// 1..=10, without the definite article
    ordinal_ones: [Gendered<&'static str>; 10],
    /// thousand, million, billion, trillion
    scales: [ScaleWord; 4],
}

impl Lexicon {
    /// The process-wide lexicon
    pub fn global() -> &'static Lexicon {
        &LEXICON
    }

    fn build() -> Self {
        Self {
            cardinal_ones: [
                gendered(plain("صفر"), plain("صفر")),
                gendered(plain("واحد"), plain("واحدة")),
                gendered(cased("اثنان", "اثنين"), cased("اثنتان", "اثنتين")),
                gendered(plain("ثلاث"), plain("ثلاثة")),
                gendered(plain("أربع"), plain("أربعة")),
                gendered(plain("خمس"), plain("خمسة")),
                gendered(plain("ست"), plain("ستة")),
                gendered(plain("سبع"), plain("سبعة")),
                gendered(plain("ثماني"), plain("ثمانية")),
                gendered(plain("تسع"), plain("تسعة")),
                gendered(plain("عشر"), plain("عشرة")),
                gendered(plain("أحد عشر"), plain("إحدى عشرة")),
                gendered(
                    cased("اثنا عشر", "اثني عشر"),
                    cased("اثنتا عشرة", "اثنتي عشرة"),
                ),
                gendered(plain("ثلاث عشرة"), plain("ثلاثة عشر")),
                gendered(plain("أربع عشرة"), plain("أربعة عشر")),
                gendered(plain("خمس عشرة"), plain("خمسة عشر")),
                gendered(plain("ست عشرة"), plain("ستة عشر")),
                gendered(plain("سبع عشرة"), plain("سبعة عشر")),
                gendered(plain("ثماني عشرة"), plain("ثمانية عشر")),
                gendered(plain("تسع عشرة"), plain("تسعة عشر")),
            ],
            tens: [
                cased("عشرون", "عشرين"),
                cased("ثلاثون", "ثلاثين"),
                cased("أربعون", "أربعين"),
                cased("خمسون", "خمسين"),
                cased("ستون", "ستين"),
                cased("سبعون", "سبعين"),
                cased("ثمانون", "ثمانين"),
                cased("تسعون", "تسعين"),
            ],
            hundreds: [
                plain("مئة"),
                cased("مئتان", "مئتين"),
                plain("ثلاثمئة"),
                plain("أربعمئة"),
                plain("خمسمئة"),
                plain("ستمئة"),
                plain("سبعمئة"),
                plain("ثمانمئة"),
                plain("تسعمئة"),
            ],
            ordinal_ones: [
                gendered("أول", "أولى"),
                gendered("ثاني", "ثانية"),
                gendered("ثالث", "ثالثة"),
                gendered("رابع", "رابعة"),
                gendered("خامس", "خامسة"),
                gendered("سادس", "سادسة"),
                gendered("سابع", "سابعة"),
                gendered("ثامن", "ثامنة"),
                gendered("تاسع", "تاسعة"),
                gendered("عاشر", "عاشرة"),
            ],
            scales: [
                ScaleWord {
                    dual_nominative: "ألفان",
                    dual_accusative: "ألفين",
                    plural: "آلاف",
                    singular: "ألف",
                },
                ScaleWord {
                    dual_nominative: "مليونان",
                    dual_accusative: "مليونين",
                    plural: "ملايين",
                    singular: "مليون",
                },
                ScaleWord {
                    dual_nominative: "ملياران",
                    dual_accusative: "مليارين",
                    plural: "مليارات",
                    singular: "مليار",
                },
                ScaleWord {
                    dual_nominative: "تريليونان",
                    dual_accusative: "تريليونين",
                    plural: "تريليونات",
                    singular: "تريليون",
                },
            ],
        }
    }

    /// Cardinal word for 0..=19
    pub fn cardinal_one(&self, number: u32) -> Gendered<Word> {
        self.cardinal_ones[number as usize]
    }

    /// Tens word for an exact multiple of ten in 20..=90
    pub fn tens(&self, key: u32) -> Word {
        self.tens[(key / 10 - 2) as usize]
    }

    /// Hundreds word for an exact multiple of a hundred in 100..=900
    pub fn hundred(&self, key: u32) -> Word {
        self.hundreds[(key / 100 - 1) as usize]
    }

    /// Ordinal word for 1..=10
    pub fn ordinal(&self, number: u32) -> Gendered<&'static str> {
        self.ordinal_ones[(number - 1) as usize]
    }

    pub fn has_ordinal(&self, number: u32) -> bool {
        (1..=self.ordinal_ones.len() as u32).contains(&number)
    }

    /// Scale noun for block position 1..=4
    pub fn scale(&self, position: usize) -> ScaleWord {
        self.scales[position - 1]
    }

    /// Number of scale positions above the units block
    pub fn scale_count(&self) -> usize {
        self.scales.len()
    }

    pub fn arabic_indic_digits(&self) -> &'static [(char, char); 10] {
        &ARABIC_INDIC_DIGITS
    }

    /// Arabic-Indic glyph for an ASCII digit, `None` for anything else
    pub fn arabic_indic_digit(&self, digit: char) -> Option<char> {
        digit
            .to_digit(10)
            .map(|value| ARABIC_INDIC_DIGITS[value as usize].1)
    }
}
