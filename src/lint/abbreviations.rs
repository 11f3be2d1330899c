//! Static table of long phrases and their preferred short forms.
//!
//! Consulted when a commit title is too long, to suggest replacements that
//! would shorten it. Entries are kept in the order suggestions are reported.

/// A long phrase and the short form that should replace it in titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Abbreviation {
    /// Phrase to look for, matched as a whole word.
    pub long_form: &'static str,
    /// Suggested replacement.
    pub short_form: &'static str,
}

impl Abbreviation {
    const fn new(long_form: &'static str, short_form: &'static str) -> Self {
        Self {
            long_form,
            short_form,
        }
    }
}

/// Every known abbreviation, in suggestion order.
pub static ABBREVIATIONS: &[Abbreviation] = &[
    Abbreviation::new("1 second", "1sec"),
    Abbreviation::new("1second", "1sec"),
    Abbreviation::new("absolute", "abs"),
    Abbreviation::new("address", "addr"),
    Abbreviation::new("allocate", "alloc"),
    Abbreviation::new("alternate", "alt"),
    Abbreviation::new("alternative", "alt"),
    Abbreviation::new("and", "&"),
    Abbreviation::new("application", "app"),
    Abbreviation::new("argument", "arg"),
    Abbreviation::new("asynchronous", "async"),
    Abbreviation::new("attribute", "attrib"),
    Abbreviation::new("authenticate", "auth"),
    Abbreviation::new("authentication", "auth"),
    Abbreviation::new("average", "avg"),
    Abbreviation::new("background", "bg"),
    Abbreviation::new("binary", "bin"),
    Abbreviation::new("bitcoin", "BTC"),
    Abbreviation::new("block", "blk"),
    Abbreviation::new("boolean", "bool"),
    Abbreviation::new("buffer", "buf"),
    Abbreviation::new("button", "btn"),
    Abbreviation::new("calculate", "calc"),
    Abbreviation::new("callback", "cb"),
    Abbreviation::new("channel", "chan"),
    Abbreviation::new("character", "char"),
    Abbreviation::new("characters", "chars"),
    Abbreviation::new("collection", "coll"),
    Abbreviation::new("column", "col"),
    Abbreviation::new("command", "cmd"),
    Abbreviation::new("command line", "cmdline"),
    Abbreviation::new("compare", "cmp"),
    Abbreviation::new("concatenate", "concat"),
    Abbreviation::new("config", "cfg"),
    Abbreviation::new("configuration", "config"),
    Abbreviation::new("connection", "conn"),
    Abbreviation::new("context", "ctx"),
    Abbreviation::new("continue", "cont"),
    Abbreviation::new("control", "ctrl"),
    Abbreviation::new("conversation", "convo"),
    Abbreviation::new("conversion", "conv"),
    Abbreviation::new("convert", "conv"),
    Abbreviation::new("coordinate", "coord"),
    Abbreviation::new("database", "db"),
    Abbreviation::new("debug", "dbg"),
    Abbreviation::new("decimal", "dec"),
    Abbreviation::new("decrease", "dec"),
    Abbreviation::new("define", "def"),
    Abbreviation::new("delete", "drop"),
    Abbreviation::new("deprecated", "obsolete"),
    Abbreviation::new("destination", "dest"),
    Abbreviation::new("developer", "dev"),
    Abbreviation::new("development", "dev"),
    Abbreviation::new("difference", "diff"),
    Abbreviation::new("directory", "dir"),
    Abbreviation::new("document", "doc"),
    Abbreviation::new("dollar", "USD"),
    Abbreviation::new("dollars", "USD"),
    Abbreviation::new("dos to unix", "dos2unix"),
    Abbreviation::new("dotnet", ".NET"),
    Abbreviation::new("eight", "8"),
    Abbreviation::new("end to end", "end2end"),
    Abbreviation::new("end2end", "e2e"),
    Abbreviation::new("english", "eng"),
    Abbreviation::new("environment", "env"),
    Abbreviation::new("error", "err"),
    Abbreviation::new("ethereum", "ETH"),
    Abbreviation::new("executable", "exe"),
    Abbreviation::new("execute", "exec"),
    Abbreviation::new("expression", "expr"),
    Abbreviation::new("figure", "fig"),
    Abbreviation::new("first", "1st"),
    Abbreviation::new("five", "5"),
    Abbreviation::new("folder", "dir"),
    Abbreviation::new("for example", "e.g."),
    Abbreviation::new("format", "fmt"),
    Abbreviation::new("four", "4"),
    Abbreviation::new("func", "fn"),
    Abbreviation::new("function", "func"),
    Abbreviation::new("generate", "gen"),
    Abbreviation::new("generation", "gen"),
    Abbreviation::new("hardware", "hw"),
    Abbreviation::new("hexadecimal", "hex"),
    Abbreviation::new("identifier", "id"),
    Abbreviation::new("image", "img"),
    Abbreviation::new("increase", "inc"),
    Abbreviation::new("increment", "inc"),
    Abbreviation::new("index", "idx"),
    Abbreviation::new("information", "info"),
    Abbreviation::new("initialize", "init"),
    Abbreviation::new("integer", "int"),
    Abbreviation::new("interface", "iface"),
    Abbreviation::new("language", "lang"),
    Abbreviation::new("length", "len"),
    Abbreviation::new("library", "lib"),
    Abbreviation::new("litecoin", "LTC"),
    Abbreviation::new("macOS", "mac"),
    Abbreviation::new("maximum", "max"),
    Abbreviation::new("memory", "mem"),
    Abbreviation::new("message", "msg"),
    Abbreviation::new("middle", "mid"),
    Abbreviation::new("minimum", "min"),
    Abbreviation::new("minute", "min"),
    Abbreviation::new("minutes", "mins"),
    Abbreviation::new("miscellaneous", "misc"),
    Abbreviation::new("modulo", "mod"),
    Abbreviation::new("navigation", "nav"),
    Abbreviation::new("network", "net"),
    Abbreviation::new("nine", "9"),
    Abbreviation::new("no/yes", "y/n"),
    Abbreviation::new("number", "num"),
    Abbreviation::new("object", "obj"),
    Abbreviation::new("one", "1"),
    Abbreviation::new("one second", "1sec"),
    Abbreviation::new("operating system", "OS"),
    Abbreviation::new("operation", "op"),
    Abbreviation::new("optional", "opt"),
    Abbreviation::new("order by", "sort by"),
    Abbreviation::new("parameter", "param"),
    Abbreviation::new("parentheses", "parens"),
    Abbreviation::new("parenthesis", "paren"),
    Abbreviation::new("picture", "pic"),
    Abbreviation::new("pointer", "ptr"),
    Abbreviation::new("position", "pos"),
    Abbreviation::new("power", "pow"),
    Abbreviation::new("preference", "pref"),
    Abbreviation::new("previous", "prev"),
    Abbreviation::new("problem", "issue"),
    Abbreviation::new("process", "proc"),
    Abbreviation::new("query", "qry"),
    Abbreviation::new("range", "rng"),
    Abbreviation::new("receive", "recv"),
    Abbreviation::new("remove", "rm"),
    Abbreviation::new("replace", "swap"),
    Abbreviation::new("repository", "repo"),
    Abbreviation::new("request", "req"),
    Abbreviation::new("result", "res"),
    Abbreviation::new("return", "ret"),
    Abbreviation::new("revision", "rev"),
    Abbreviation::new("second", "2nd"),
    Abbreviation::new("seconds", "secs"),
    Abbreviation::new("select", "sel"),
    Abbreviation::new("sequence", "seq"),
    Abbreviation::new("seven", "7"),
    Abbreviation::new("six", "6"),
    Abbreviation::new("software", "sw"),
    Abbreviation::new("source", "src"),
    Abbreviation::new("square root", "sqrt"),
    Abbreviation::new("standard", "std"),
    Abbreviation::new("statistic", "stat"),
    Abbreviation::new("statistics", "stats"),
    Abbreviation::new("string", "str"),
    Abbreviation::new("synchronize", "sync"),
    Abbreviation::new("temporary", "tmp"),
    Abbreviation::new("third", "3rd"),
    Abbreviation::new("three", "3"),
    Abbreviation::new("timer", "tmr"),
    Abbreviation::new("transaction", "tx"),
    Abbreviation::new("transactions", "txs"),
    Abbreviation::new("two", "2"),
    Abbreviation::new("unix to dos", "unix2dos"),
    Abbreviation::new("unnecessary", "unneeded"),
    Abbreviation::new("unsigned integer", "uint"),
    Abbreviation::new("upgrade", "update"),
    Abbreviation::new("value", "val"),
    Abbreviation::new("variable", "var"),
    Abbreviation::new("yes/no", "y/n"),
    Abbreviation::new("zero", "0"),
];
