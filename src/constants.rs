//! Static string sets consulted by the splitters.
//!
//! The prefix and suffix lists are not linguistically rigorous and contain
//! overlaps; they are opaque veto lists, not a morphology model. Do not try
//! to derive or normalize them.

use foldhash::HashSet;
use std::sync::LazyLock;

/// Terms with embedded digits that must survive digit and camel splitting
/// as single tokens (`utf8`, `ipv4`, `sha256`, ...). Compared lowercase.
pub static COMMON_TERMS_WITH_NUMBERS: &[&str] = &[
    "utf8", "utf16", "utf32", "i18n", "l10n", "ipv4", "ipv6", "mp3", "mp4", "mpeg2", "mpeg4",
    "md5", "sha1", "sha256", "sha512", "crc32", "base32", "base64", "rot13", "x86", "x64",
    "win32", "win64", "amd64", "arm64", "float32", "float64", "iso8601", "rfc822", "oauth2",
    "http2", "h264", "h265",
];

/// Numeric suffixes that keep their host token whole (`size64`, `buf128`).
pub static COMMON_SUFFIX_NUMBERS: &[&str] =
    &["8", "16", "32", "64", "128", "256", "512", "1024"];

/// Morpheme prefixes that veto a same-case split point when they appear as
/// the left side. From the word lists published with Enslen, Hill, Pollock
/// & Vijay-Shanker's identifier-splitting study (MSR'09).
pub(crate) static PREFIX_TERMS: &[&str] = &[
    "afro", "ambi", "amphi", "ana", "anglo", "apo", "astro", "bi", "bio", "circum", "cis",
    "co", "col", "com", "con", "contra", "cor", "cryo", "crypto", "de", "demi", "di", "dif",
    "dis", "du", "duo", "eco", "electro", "em", "en", "epi", "euro", "ex", "franco", "geo",
    "hemi", "hetero", "homo", "hydro", "hypo", "ideo", "idio", "il", "im", "infra", "inter",
    "intra", "ir", "iso", "macr", "mal", "maxi", "mega", "megalo", "micro", "midi", "mini",
    "mis", "mon", "multi", "neo", "omni", "paleo", "para", "ped", "peri", "poly", "pre",
    "preter", "proto", "pyro", "re", "retro", "semi", "socio", "supra", "sur", "sy", "syl",
    "sym", "syn", "tele", "trans", "tri", "twi", "ultra", "un", "uni",
];

static PREFIXES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PREFIX_TERMS.iter().copied().collect());

/// Morpheme suffixes that veto a same-case split point when they appear as
/// the right side of a long-enough string. Same provenance as
/// [`PREFIX_TERMS`].
pub(crate) static SUFFIX_TERMS: &[&str] = &[
    "a", "ac", "acea", "aceae", "acean", "aceous", "ade", "aemia", "agogue", "aholic", "al",
    "ales", "algia", "amine", "ana", "anae", "ance", "ancy", "androus", "andry", "ane", "ar",
    "archy", "ard", "aria", "arian", "arium", "ary", "ase", "athon", "ation", "ative",
    "ator", "atory", "biont", "biosis", "cade", "caine", "carp", "carpic", "carpous", "cele",
    "cene", "centric", "cephalic", "cephalous", "cephaly", "chory", "chrome", "cide",
    "clast", "clinal", "cline", "coccus", "coel", "coele", "colous", "cracy", "crat",
    "cratic", "cratical", "cy", "cyte", "derm", "derma", "dermatous", "dom", "drome",
    "dromous", "eae", "ectomy", "ed", "ee", "eer", "ein", "eme", "emia", "en", "ence",
    "enchyma", "ency", "ene", "ent", "eous", "er", "ergic", "ergy", "es", "escence",
    "escent", "ese", "esque", "ess", "est", "et", "eth", "etic", "ette", "ey", "facient",
    "fer", "ferous", "fic", "fication", "fid", "florous", "foliate", "foliolate", "fuge",
    "ful", "fy", "gamous", "gamy", "gen", "genesis", "genic", "genous", "geny", "gnathous",
    "gon", "gony", "grapher", "graphy", "gyne", "gynous", "gyny", "ia", "ial", "ian", "iana",
    "iasis", "iatric", "iatrics", "iatry", "ibility", "ible", "ic", "icide", "ician", "ick",
    "ics", "idae", "ide", "ie", "ify", "ile", "ina", "inae", "ine", "ineae", "ing", "ini",
    "ious", "isation", "ise", "ish", "ism", "ist", "istic", "istical", "istically", "ite",
    "itious", "itis", "ity", "ium", "ive", "ization", "ize", "kinesis", "kins", "latry",
    "lepry", "ling", "lite", "lith", "lithic", "logue", "logist", "logy", "ly", "lyse",
    "lysis", "lyte", "lytic", "lyze", "mancy", "mania", "meister", "ment", "merous", "metry",
    "mo", "morph", "morphic", "morphism", "morphous", "mycete", "mycetes", "mycetidae",
    "mycin", "mycota", "mycotina", "ness", "nik", "nomy", "odon", "odont", "odontia",
    "oholic", "oic", "oid", "oidea", "oideae", "ol", "ole", "oma", "ome", "ont", "onym",
    "onymy", "opia", "opsida", "opsis", "opsy", "orama", "ory", "ose", "osis", "otic",
    "otomy", "ous", "para", "parous", "pathy", "ped", "pede", "penia", "phage", "phagia",
    "phagous", "phagy", "phane", "phasia", "phil", "phile", "philia", "philiac", "philic",
    "philous", "phobe", "phobia", "phobic", "phony", "phore", "phoresis", "phorous",
    "phrenia", "phyll", "phyllous", "phyceae", "phycidae", "phyta", "phyte", "phytina",
    "plasia", "plasm", "plast", "plasty", "plegia", "plex", "ploid", "pode", "podous",
    "poieses", "poietic", "pter", "rrhagia", "rrhea", "ric", "ry", "s", "scopy", "sepalous",
    "sperm", "sporous", "st", "stasis", "stat", "ster", "stome", "stomy", "taxy", "th",
    "therm", "thermal", "thermic", "thermy", "thon", "thymia", "tion", "tome", "tomy",
    "tonia", "trichous", "trix", "tron", "trophic", "tropism", "tropous", "tropy", "tude",
    "ty", "ular", "ule", "ure", "urgy", "uria", "uronic", "urous", "valent", "virile",
    "vorous", "xor", "y", "yl", "yne", "zoic", "zoon", "zygous", "zyme",
];

static SUFFIXES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SUFFIX_TERMS.iter().copied().collect());

/// Domain vocabulary treated as recognized regardless of the English
/// dictionary: abbreviations, protocols, and terms of art that show up in
/// identifiers far more often than in prose.
static SPECIAL_COMPUTING_TERMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "admin", "ajax", "alloc", "api", "arg", "argc", "argv", "ascii", "ast", "async", "auth",
        "avg", "backend", "bool", "boolean", "btree", "buf", "calc", "cfg", "char", "checksum",
        "cli", "config", "cpu", "css", "ctor", "ctx", "cwd", "daemon", "db", "dbg", "decr",
        "dest", "dev", "dir", "dns", "dom", "dst", "endian", "enum", "env", "eof", "err",
        "exe", "exec", "expr", "fd", "fifo", "filename", "filesystem", "fmt", "frontend",
        "func", "gcc", "gid", "gps", "gpu", "grep", "gui", "hash", "hex", "hostname", "html",
        "http", "https", "idx", "impl", "incr", "init", "inode", "int", "io", "ip", "iter",
        "javascript", "jpeg", "json", "jwt", "kernel", "lang", "latin1", "len", "lexer", "lib",
        "lifo", "login", "logout", "lookup", "lexeme", "malloc", "max", "metadata", "middleware",
        "min", "mkdir", "mpeg", "mpegts", "msg", "multibyte", "mutex", "namespace", "nan", "nil",
        "num", "obj", "oct", "opcode", "os", "param", "parser", "pathname", "pdf", "perl",
        "pid", "pixel", "pkg", "png", "posix", "prev", "proc", "ptr", "px", "qt", "queue",
        "regex", "regexp", "repo", "rgb", "rpc", "runtime", "rx", "sdk", "sed", "sizeof",
        "smtp", "sql", "src", "ssh", "ssl", "stderr", "stdin", "stdio", "stdout", "str",
        "struct", "subdir", "sudo", "svg", "symlink", "sync", "syscall", "tcp", "timestamp",
        "tls", "tmp", "todo", "toolkit", "tooltip", "trie", "tty", "tuple", "tx", "txt", "udp",
        "uid", "unicode", "uri", "url", "usb", "username", "usr", "util", "uuid", "var",
        "vec", "vfs", "vm", "whitespace", "wifi", "workflow", "xml", "xpath", "yaml",
    ]
    .into_iter()
    .collect()
});

static COMMON_TERMS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_TERMS_WITH_NUMBERS.iter().copied().collect());

/// Membership in the common-terms-with-numbers set, case-insensitive.
pub fn is_common_term_with_numbers(token: &str) -> bool {
    COMMON_TERMS_SET.contains(token.to_ascii_lowercase().as_str())
}

/// Membership in the special computing terms set, case-insensitive.
pub fn is_special_computing_term(token: &str) -> bool {
    SPECIAL_COMPUTING_TERMS.contains(token.to_ascii_lowercase().as_str())
}

/// Whether a candidate left side is a veto prefix, case-insensitive.
pub fn is_prefix(token: &str) -> bool {
    PREFIXES.contains(token.to_ascii_lowercase().as_str())
}

/// Whether a candidate right side is a veto suffix, case-insensitive.
pub fn is_suffix(token: &str) -> bool {
    SUFFIXES.contains(token.to_ascii_lowercase().as_str())
}

/// Whether a piece ends in one of the common numeric suffixes (`64`, `128`).
pub fn has_common_suffix_number(piece: &str) -> bool {
    COMMON_SUFFIX_NUMBERS.iter().any(|n| piece.ends_with(n))
}
