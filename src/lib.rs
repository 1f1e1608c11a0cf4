//! Turns arbitrary text into URL-friendly slugs.
//!
//! Characters are transliterated through a [`CharMap`], characters that have no
//! place in a slug are dropped, and whitespace runs become a separator.
//!
//! ```
//! use slugify_charmap::{slugify, slugify_with, Options};
//!
//! assert_eq!(slugify("Ünïcödé ♥ & Rust"), "Unicode-love-and-Rust");
//! assert_eq!(slugify_with("Foo bAr baZ", Options::new().lower(true)), "foo-bar-baz");
//! ```
#![forbid(unsafe_code)]

mod charmap;
mod error;
mod options;
mod transform;

pub use charmap::CharMap;
pub use error::SlugifyError;
pub use options::{Options, OptionsConfig, DEFAULT_REPLACEMENT};

/// Slugifies `input` with the default options and the global [`CharMap`].
pub fn slugify(input: &str) -> String {
    CharMap::global().slugify(input, Options::default())
}

/// Slugifies `input` with the global [`CharMap`].
///
/// `options` can be an [`Options`] value or just the replacement string.
pub fn slugify_with(input: &str, options: impl Into<Options>) -> String {
    CharMap::global().slugify(input, options)
}

/// Merges `entries` into the global [`CharMap`]. Affects every later call in the process.
pub fn extend<I, S>(entries: I)
where
    I: IntoIterator<Item = (char, S)>,
    S: Into<String>,
{
    CharMap::global().extend(entries)
}

/// String-keyed [`extend`]. Fails without touching the table if a key isn't a single character.
pub fn try_extend<I, K, S>(entries: I) -> Result<(), SlugifyError>
where
    I: IntoIterator<Item = (K, S)>,
    K: AsRef<str>,
    S: Into<String>,
{
    CharMap::global().try_extend(entries)
}

/// The live global table.
pub fn char_map() -> &'static CharMap {
    CharMap::global()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use map_macro::hash_map;

    use crate::{char_map, charmap, extend, slugify, slugify_with, try_extend, CharMap, Options};

    /// Checks `"foo {ch} bar baz"` against the table entry for each character.
    fn assert_table_chars(chars: &str) {
        let char_map = CharMap::new();

        for ch in chars.chars().filter(|c| !c.is_whitespace()) {
            let mapped = char_map
                .get(ch)
                .unwrap_or_else(|| panic!("`{ch}` is not in the table"));

            let expected = if mapped.is_empty() {
                "foo-bar-baz".to_string()
            } else {
                format!("foo-{}-bar-baz", mapped.replace(' ', "-"))
            };

            assert_eq!(
                char_map.slugify(&format!("foo {ch} bar baz"), Options::default()),
                expected,
                "{ch}"
            );
        }
    }

    #[test]
    fn replace_whitespace_with_replacement() {
        assert_eq!(slugify("foo bar baz"), "foo-bar-baz");
        assert_eq!(slugify_with("foo bar baz", "_"), "foo_bar_baz");
        assert_eq!(
            slugify_with("foo bar baz", Options::new().replacement("_")),
            "foo_bar_baz"
        );
    }

    #[test]
    fn remove_surrounding_space() {
        assert_eq!(slugify(" foo bar baz "), "foo-bar-baz");
    }

    #[test]
    fn remove_not_allowed_chars() {
        assert_eq!(slugify("foo, bar baz"), "foo-bar-baz");
        assert_eq!(slugify("foo- bar baz"), "foo-bar-baz");
        assert_eq!(slugify("foo] bar baz"), "foo-bar-baz");
    }

    #[test]
    fn leave_allowed_chars() {
        for symbol in ["*", "+", "~", ".", "(", ")", "'", "\"", "!", ":", "@"] {
            assert_eq!(
                slugify(&format!("foo {symbol} bar baz")),
                format!("foo-{symbol}-bar-baz")
            );
        }
    }

    #[test]
    fn remove_pattern_option() {
        let options = Options::new()
            .remove_pattern(r#"[$*_+~.()'"!\-:@]"#)
            .unwrap();

        assert_eq!(
            slugify_with("foo *+~.() bar '\"!:@ baz", options),
            "foo-bar-baz"
        );
    }

    #[test]
    fn lower_option() {
        assert_eq!(
            slugify_with("Foo bAr baZ", Options::new().lower(true)),
            "foo-bar-baz"
        );
    }

    #[test]
    fn every_default_entry() {
        for block in charmap::DEFAULT_BLOCKS {
            let chars: String = block.iter().map(|&(ch, _)| ch).collect();
            assert_table_chars(&chars);
        }
    }

    #[test]
    fn latin_chars() {
        assert_table_chars(
            "ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖŐØÙÚÛÜŰÝÞßàáâãäåæçèéêëìíîïðñòóôõöőøùúûüűýþÿẞ",
        );
        assert_eq!(slugify("Þórr Æsir Straße"), "THorr-AEsir-Strasse");
    }

    #[test]
    fn greek_chars() {
        assert_table_chars("αβγδεζηθικλμνξοπρστυφχψωάέίόύήώςϊΰϋΐ");
        assert_table_chars("ΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡΣΤΥΦΧΨΩΆΈΊΌΎΉΏΪΫ");
        assert_eq!(slugify("Θεός ξένος"), "8eos-3enos");
    }

    #[test]
    fn turkish_chars() {
        assert_table_chars("şŞıİçÇüÜöÖğĞ");
    }

    #[test]
    fn cyrillic_chars() {
        assert_table_chars("абвгдеёжзийклмнопрстуфхцчшщъыьэюя");
        assert_table_chars("АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ");
        assert_table_chars("ЄІЇҐєіїґ");
    }

    #[test]
    fn czech_chars() {
        assert_table_chars("čďěňřšťůžČĎĚŇŘŠŤŮŽ");
    }

    #[test]
    fn polish_chars() {
        assert_table_chars("ąćęłńóśźżĄĆĘŁŃŚŹŻ");
        assert_eq!(slugify("Ę"), "e");
    }

    #[test]
    fn latvian_chars() {
        assert_table_chars("āčēģīķļņšūžĀČĒĢĪĶĻŅŠŪŽ");
        assert_eq!(slugify("Ī Ķ Ū"), "i-k-u");
    }

    #[test]
    fn serbian_chars() {
        assert_table_chars("đǌǉĐǋǈђјљњћџЂЈЉЊЋЏ");
    }

    #[test]
    fn currencies() {
        assert_table_chars("€₢₣£₤₥₦₧₨₩₪₫₭₮₯₰₱₲₳₴₵¢¥元円﷼₠¤฿$₽₿");
        assert_eq!(slugify("100 ₣"), "100-french-franc");
        assert_eq!(slugify_with("100 ₪", "_"), "100_new_shequel");
    }

    #[test]
    fn symbols() {
        assert_table_chars("©œŒ∑®†“”‘’∂ƒ™℠…˚ºª•∆∞♥&|<>");
    }

    #[test]
    fn bulgarian_alphabet() {
        let alphabet = "А а, Б б, В в, Г г, Д д, Е е, Ж ж, З з, И и, Й й, \
                        К к, Л л, М м, Н н, О о, П п, Р р, С с, Т т, У у, \
                        Ф ф, Х х, Ц ц, Ч ч, Ш ш, Щ щ, Ъ ъ, ѝ ь, Ю ю, Я я";

        assert_eq!(
            slugify(alphabet),
            "A-a-B-b-V-v-G-g-D-d-E-e-Zh-zh-Z-z-I-i-J-j-K-k-L-l-M-m-N-n-O-o-P-p-R-r-S-s-T-t-U-u-F-f-H-h-C-c-Ch-ch-Sh-sh-Sh-sh-U-u-Yu-yu-Ya-ya"
        );
    }

    #[test]
    fn serbian_alphabets() {
        let latin = "A a, B b, V v, G g, D d, Đ đ, E e, Ž ž, Z z, I i, \
                     J j, K k, L l, Lj lj, M m, N n, Nj nj, O o, P p, R r, \
                     S s, T t, Ć ć, U u, F f, H h, C c, Č č, Dž dž, Š š";
        let cyrillic = "А а, Б б, В в, Г г, Д д, Ђ ђ, Е е, Ж ж, З з, И и, \
                        Ј ј, К к, Л л, Љ љ, М м, Н н, Њ њ, О о, П п, Р р, \
                        С с, Т т, Ћ ћ, У у, Ф ф, Х х, Ц ц, Ч ч, Џ џ, Ш ш";

        assert_eq!(
            slugify(latin),
            "A-a-B-b-V-v-G-g-D-d-DJ-dj-E-e-Z-z-Z-z-I-i-J-j-K-k-L-l-Lj-lj-M-m-N-n-Nj-nj-O-o-P-p-R-r-S-s-T-t-C-c-U-u-F-f-H-h-C-c-C-c-Dz-dz-S-s"
        );
        assert_eq!(
            slugify(cyrillic),
            "A-a-B-b-V-v-G-g-D-d-DJ-dj-E-e-Zh-zh-Z-z-I-i-J-j-K-k-L-l-LJ-lj-M-m-N-n-NJ-nj-O-o-P-p-R-r-S-s-T-t-C-c-U-u-F-f-H-h-C-c-Ch-ch-DZ-dz-Sh-sh"
        );
    }

    #[test]
    fn turkish_alphabet() {
        let alphabet = "A a, B b, C c, Ç ç, D d, E e, F f, G g, Ğ ğ, H h, \
                        I ı, İ i, J j, K k, L l, M m, N n, O o, Ö ö, P p, \
                        R r, S s, Ş ş, T t, U u, Ü ü, V v, Y y, Z z";

        assert_eq!(
            slugify(alphabet),
            "A-a-B-b-C-c-C-c-D-d-E-e-F-f-G-g-G-g-H-h-I-i-I-i-J-j-K-k-L-l-M-m-N-n-O-o-O-o-P-p-R-r-S-s-S-s-T-t-U-u-U-u-V-v-Y-y-Z-z"
        );
    }

    #[test]
    fn georgian_alphabet() {
        let alphabet = "ა, ბ, გ, დ, ე, ვ, ზ, თ, ი, კ, ლ, \
                        მ, ნ, ო, პ, ჟ, რ, ს, ტ, უ, ფ, ქ, \
                        ღ, ყ, შ, ჩ, ც, ძ, წ, ჭ, ხ, ჯ, ჰ";

        assert_eq!(
            slugify(alphabet),
            "a-b-g-d-e-v-z-t-i-k-l-m-n-o-p-zh-r-s-t-u-f-k-gh-q-sh-ch-ts-dz-ts-ch-kh-j-h"
        );
    }

    #[test]
    fn vietnamese() {
        assert_eq!(
            slugify_with("Tiếng Việt có dấu", Options::new().lower(true)),
            "tieng-viet-co-dau"
        );
    }

    #[test]
    fn extend_global_table() {
        extend(hash_map! { '☢' => "radioactive" });

        assert_eq!(slugify("unicode ♥ is ☢"), "unicode-love-is-radioactive");
        // Still there for later calls.
        assert_eq!(slugify("☢ ☢"), "radioactive-radioactive");
        assert_eq!(char_map().get('☢').as_deref(), Some("radioactive"));
    }

    #[test]
    fn try_extend_global_table() {
        try_extend([("♣", "clubs")]).unwrap();
        assert_eq!(slugify("♣ suit"), "clubs-suit");

        assert!(try_extend([("♠♠", "spades")]).is_err());
        assert!(!char_map().contains('♠'));
    }

    #[test]
    fn output_invariants() {
        let inputs = [
            "  Hello,   World!  ",
            "--a--b--",
            "tab\tseparated\nlines",
            "[brackets] {braces} #hash %percent ^caret",
            "Ω ≈ ç √ ∫",
        ];

        for input in inputs {
            let slug = slugify(input);

            assert!(!slug.chars().any(char::is_whitespace), "{slug}");
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug}");
            assert!(!slug.contains("--"), "{slug}");
            assert!(
                slug.chars().all(|c| c.is_ascii_alphanumeric()
                    || "_$*+~.()'\"!-:@".contains(c)),
                "{slug}"
            );
        }
    }
}
