/// Latin-1 supplement and the Latin Extended letters not owned by a language block.
pub(crate) const LATIN: &[(char, &str)] = &[
    ('À', "A"),
    ('Á', "A"),
    ('Â', "A"),
    ('Ã', "A"),
    ('Ä', "A"),
    ('Å', "A"),
    ('Æ', "AE"),
    ('Ç', "C"),
    ('È', "E"),
    ('É', "E"),
    ('Ê', "E"),
    ('Ë', "E"),
    ('Ì', "I"),
    ('Í', "I"),
    ('Î', "I"),
    ('Ï', "I"),
    ('Ð', "D"),
    ('Ñ', "N"),
    ('Ò', "O"),
    ('Ó', "O"),
    ('Ô', "O"),
    ('Õ', "O"),
    ('Ö', "O"),
    ('Ő', "O"),
    ('Ø', "O"),
    ('Ù', "U"),
    ('Ú', "U"),
    ('Û', "U"),
    ('Ü', "U"),
    ('Ű', "U"),
    ('Ý', "Y"),
    ('Þ', "TH"),
    ('ß', "ss"),
    ('à', "a"),
    ('á', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('ä', "a"),
    ('å', "a"),
    ('æ', "ae"),
    ('ç', "c"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ì', "i"),
    ('í', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ð', "d"),
    ('ñ', "n"),
    ('ò', "o"),
    ('ó', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ö', "o"),
    ('ő', "o"),
    ('ø', "o"),
    ('ù', "u"),
    ('ú', "u"),
    ('û', "u"),
    ('ü', "u"),
    ('ű', "u"),
    ('ý', "y"),
    ('þ', "th"),
    ('ÿ', "y"),
    ('ẞ', "SS"),
    ('Ă', "A"),
    ('ă', "a"),
    ('Ė', "E"),
    ('ė', "e"),
    ('Ĩ', "I"),
    ('ĩ', "i"),
    ('Į', "I"),
    ('į', "i"),
    ('Ľ', "L"),
    ('ľ', "l"),
    ('Ŕ', "R"),
    ('ŕ', "r"),
    ('Ũ', "U"),
    ('ũ', "u"),
    ('Ų', "U"),
    ('ų', "u"),
    ('Ţ', "T"),
    ('ţ', "t"),
    ('Ș', "S"),
    ('ș', "s"),
    ('Ț', "T"),
    ('ț', "t"),
    ('Ơ', "O"),
    ('ơ', "o"),
    ('Ư', "U"),
    ('ư', "u"),
];

pub(crate) const GREEK: &[(char, &str)] = &[
    ('α', "a"),
    ('β', "b"),
    ('γ', "g"),
    ('δ', "d"),
    ('ε', "e"),
    ('ζ', "z"),
    ('η', "h"),
    ('θ', "8"),
    ('ι', "i"),
    ('κ', "k"),
    ('λ', "l"),
    ('μ', "m"),
    ('ν', "n"),
    ('ξ', "3"),
    ('ο', "o"),
    ('π', "p"),
    ('ρ', "r"),
    ('σ', "s"),
    ('τ', "t"),
    ('υ', "y"),
    ('φ', "f"),
    ('χ', "x"),
    ('ψ', "ps"),
    ('ω', "w"),
    ('ά', "a"),
    ('έ', "e"),
    ('ί', "i"),
    ('ό', "o"),
    ('ύ', "y"),
    ('ή', "h"),
    ('ώ', "w"),
    ('ς', "s"),
    ('ϊ', "i"),
    ('ΰ', "y"),
    ('ϋ', "y"),
    ('ΐ', "i"),
    ('Α', "A"),
    ('Β', "B"),
    ('Γ', "G"),
    ('Δ', "D"),
    ('Ε', "E"),
    ('Ζ', "Z"),
    ('Η', "H"),
    ('Θ', "8"),
    ('Ι', "I"),
    ('Κ', "K"),
    ('Λ', "L"),
    ('Μ', "M"),
    ('Ν', "N"),
    ('Ξ', "3"),
    ('Ο', "O"),
    ('Π', "P"),
    ('Ρ', "R"),
    ('Σ', "S"),
    ('Τ', "T"),
    ('Υ', "Y"),
    ('Φ', "F"),
    ('Χ', "X"),
    ('Ψ', "PS"),
    ('Ω', "W"),
    ('Ά', "A"),
    ('Έ', "E"),
    ('Ί', "I"),
    ('Ό', "O"),
    ('Ύ', "Y"),
    ('Ή', "H"),
    ('Ώ', "W"),
    ('Ϊ', "I"),
    ('Ϋ', "Y"),
];

/// Turkish letters; `ç`, `ö` and `ü` live in [`LATIN`].
pub(crate) const TURKISH: &[(char, &str)] = &[
    ('ş', "s"),
    ('Ş', "S"),
    ('ı', "i"),
    ('İ', "I"),
    ('ğ', "g"),
    ('Ğ', "G"),
];

/// Russian and Ukrainian Cyrillic. The soft sign is dropped entirely.
pub(crate) const CYRILLIC: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "yo"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "j"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "c"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sh"),
    ('ъ', "u"),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
    ('А', "A"),
    ('Б', "B"),
    ('В', "V"),
    ('Г', "G"),
    ('Д', "D"),
    ('Е', "E"),
    ('Ё', "Yo"),
    ('Ж', "Zh"),
    ('З', "Z"),
    ('И', "I"),
    ('Й', "J"),
    ('К', "K"),
    ('Л', "L"),
    ('М', "M"),
    ('Н', "N"),
    ('О', "O"),
    ('П', "P"),
    ('Р', "R"),
    ('С', "S"),
    ('Т', "T"),
    ('У', "U"),
    ('Ф', "F"),
    ('Х', "H"),
    ('Ц', "C"),
    ('Ч', "Ch"),
    ('Ш', "Sh"),
    ('Щ', "Sh"),
    ('Ъ', "U"),
    ('Ы', "Y"),
    ('Ь', ""),
    ('Э', "E"),
    ('Ю', "Yu"),
    ('Я', "Ya"),
    ('Є', "Ye"),
    ('І', "I"),
    ('Ї', "Yi"),
    ('Ґ', "G"),
    ('є', "ye"),
    ('і', "i"),
    ('ї', "yi"),
    ('ґ', "g"),
];

/// Serbian Latin digraphs and the Serbian-only Cyrillic letters.
pub(crate) const SERBIAN: &[(char, &str)] = &[
    ('đ', "dj"),
    ('ǌ', "nj"),
    ('ǉ', "lj"),
    ('Đ', "DJ"),
    ('ǋ', "NJ"),
    ('ǈ', "LJ"),
    ('ђ', "dj"),
    ('ј', "j"),
    ('љ', "lj"),
    ('њ', "nj"),
    ('ћ', "c"),
    ('џ', "dz"),
    ('Ђ', "DJ"),
    ('Ј', "J"),
    ('Љ', "LJ"),
    ('Њ', "NJ"),
    ('Ћ', "C"),
    ('Џ', "DZ"),
];

pub(crate) const CZECH: &[(char, &str)] = &[
    ('č', "c"),
    ('ď', "d"),
    ('ě', "e"),
    ('ň', "n"),
    ('ř', "r"),
    ('š', "s"),
    ('ť', "t"),
    ('ů', "u"),
    ('ž', "z"),
    ('Č', "C"),
    ('Ď', "D"),
    ('Ě', "E"),
    ('Ň', "N"),
    ('Ř', "R"),
    ('Š', "S"),
    ('Ť', "T"),
    ('Ů', "U"),
    ('Ž', "Z"),
];

/// Polish letters; `ó` lives in [`LATIN`]. `Ę` folds to lowercase for compatibility.
pub(crate) const POLISH: &[(char, &str)] = &[
    ('ą', "a"),
    ('ć', "c"),
    ('ę', "e"),
    ('ł', "l"),
    ('ń', "n"),
    ('ś', "s"),
    ('ź', "z"),
    ('ż', "z"),
    ('Ą', "A"),
    ('Ć', "C"),
    ('Ę', "e"),
    ('Ł', "L"),
    ('Ń', "N"),
    ('Ś', "S"),
    ('Ź', "Z"),
    ('Ż', "Z"),
];

/// Latvian letters not already covered by [`CZECH`]. Some capitals fold to lowercase for compatibility.
pub(crate) const LATVIAN: &[(char, &str)] = &[
    ('ā', "a"),
    ('ē', "e"),
    ('ģ', "g"),
    ('ī', "i"),
    ('ķ', "k"),
    ('ļ', "l"),
    ('ņ', "n"),
    ('ū', "u"),
    ('Ā', "A"),
    ('Ē', "E"),
    ('Ģ', "G"),
    ('Ī', "i"),
    ('Ķ', "k"),
    ('Ļ', "L"),
    ('Ņ', "N"),
    ('Ū', "u"),
];

pub(crate) const VIETNAMESE: &[(char, &str)] = &[
    ('Ạ', "A"),
    ('ạ', "a"),
    ('Ả', "A"),
    ('ả', "a"),
    ('Ấ', "A"),
    ('ấ', "a"),
    ('Ầ', "A"),
    ('ầ', "a"),
    ('Ẩ', "A"),
    ('ẩ', "a"),
    ('Ẫ', "A"),
    ('ẫ', "a"),
    ('Ậ', "A"),
    ('ậ', "a"),
    ('Ắ', "A"),
    ('ắ', "a"),
    ('Ằ', "A"),
    ('ằ', "a"),
    ('Ẳ', "A"),
    ('ẳ', "a"),
    ('Ẵ', "A"),
    ('ẵ', "a"),
    ('Ặ', "A"),
    ('ặ', "a"),
    ('Ẹ', "E"),
    ('ẹ', "e"),
    ('Ẻ', "E"),
    ('ẻ', "e"),
    ('Ẽ', "E"),
    ('ẽ', "e"),
    ('Ế', "E"),
    ('ế', "e"),
    ('Ề', "E"),
    ('ề', "e"),
    ('Ể', "E"),
    ('ể', "e"),
    ('Ễ', "E"),
    ('ễ', "e"),
    ('Ệ', "E"),
    ('ệ', "e"),
    ('Ỉ', "I"),
    ('ỉ', "i"),
    ('Ị', "I"),
    ('ị', "i"),
    ('Ọ', "O"),
    ('ọ', "o"),
    ('Ỏ', "O"),
    ('ỏ', "o"),
    ('Ố', "O"),
    ('ố', "o"),
    ('Ồ', "O"),
    ('ồ', "o"),
    ('Ổ', "O"),
    ('ổ', "o"),
    ('Ỗ', "O"),
    ('ỗ', "o"),
    ('Ộ', "O"),
    ('ộ', "o"),
    ('Ớ', "O"),
    ('ớ', "o"),
    ('Ờ', "O"),
    ('ờ', "o"),
    ('Ở', "O"),
    ('ở', "o"),
    ('Ỡ', "O"),
    ('ỡ', "o"),
    ('Ợ', "O"),
    ('ợ', "o"),
    ('Ụ', "U"),
    ('ụ', "u"),
    ('Ủ', "U"),
    ('ủ', "u"),
    ('Ứ', "U"),
    ('ứ', "u"),
    ('Ừ', "U"),
    ('ừ', "u"),
    ('Ử', "U"),
    ('ử', "u"),
    ('Ữ', "U"),
    ('ữ', "u"),
    ('Ự', "U"),
    ('ự', "u"),
    ('Ỳ', "Y"),
    ('ỳ', "y"),
    ('Ỵ', "Y"),
    ('ỵ', "y"),
    ('Ỷ', "Y"),
    ('ỷ', "y"),
    ('Ỹ', "Y"),
    ('ỹ', "y"),
];

pub(crate) const GEORGIAN: &[(char, &str)] = &[
    ('ა', "a"),
    ('ბ', "b"),
    ('გ', "g"),
    ('დ', "d"),
    ('ე', "e"),
    ('ვ', "v"),
    ('ზ', "z"),
    ('თ', "t"),
    ('ი', "i"),
    ('კ', "k"),
    ('ლ', "l"),
    ('მ', "m"),
    ('ნ', "n"),
    ('ო', "o"),
    ('პ', "p"),
    ('ჟ', "zh"),
    ('რ', "r"),
    ('ს', "s"),
    ('ტ', "t"),
    ('უ', "u"),
    ('ფ', "f"),
    ('ქ', "k"),
    ('ღ', "gh"),
    ('ყ', "q"),
    ('შ', "sh"),
    ('ჩ', "ch"),
    ('ც', "ts"),
    ('ძ', "dz"),
    ('წ', "ts"),
    ('ჭ', "ch"),
    ('ხ', "kh"),
    ('ჯ', "j"),
    ('ჰ', "h"),
];

/// Currency signs spelled out in lowercase English. Multi-word names keep their
/// spaces, which the transform turns into the separator.
pub(crate) const CURRENCY: &[(char, &str)] = &[
    ('€', "euro"),
    ('₢', "cruzeiro"),
    ('₣', "french franc"),
    ('£', "pound"),
    ('₤', "lira"),
    ('₥', "mill"),
    ('₦', "naira"),
    ('₧', "peseta"),
    ('₨', "rupee"),
    ('₩', "won"),
    ('₪', "new shequel"),
    ('₫', "dong"),
    ('₭', "kip"),
    ('₮', "tugrik"),
    ('₯', "drachma"),
    ('₰', "penny"),
    ('₱', "peso"),
    ('₲', "guarani"),
    ('₳', "austral"),
    ('₴', "hryvnia"),
    ('₵', "cedi"),
    ('¢', "cent"),
    ('¥', "yen"),
    ('元', "yuan"),
    ('円', "yen"),
    ('﷼', "rial"),
    ('₠', "ecu"),
    ('¤', "currency"),
    ('฿', "baht"),
    ('$', "dollar"),
    ('₽', "russian ruble"),
    ('₿', "bitcoin"),
    ('₹', "indian rupee"),
    ('₸', "kazakhstani tenge"),
    ('₺', "turkish lira"),
];

pub(crate) const SYMBOLS: &[(char, &str)] = &[
    ('©', "(c)"),
    ('œ', "oe"),
    ('Œ', "OE"),
    ('∑', "sum"),
    ('®', "(r)"),
    ('†', "+"),
    ('“', "\""),
    ('”', "\""),
    ('‘', "'"),
    ('’', "'"),
    ('∂', "d"),
    ('ƒ', "f"),
    ('™', "tm"),
    ('℠', "sm"),
    ('…', "..."),
    ('˚', "o"),
    ('º', "o"),
    ('ª', "a"),
    ('•', "*"),
    ('∆', "delta"),
    ('∞', "infinity"),
    ('♥', "love"),
    ('&', "and"),
    ('|', "or"),
    ('<', "less"),
    ('>', "greater"),
];

/// Every block of the default table, in seeding order.
pub(crate) const DEFAULT_BLOCKS: &[&[(char, &str)]] = &[
    LATIN, GREEK, TURKISH, CYRILLIC, SERBIAN, CZECH, POLISH, LATVIAN, VIETNAMESE, GEORGIAN,
    CURRENCY, SYMBOLS,
];
