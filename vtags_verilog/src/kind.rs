//! Word kinds and the keyword tables driving recognition.
//!
//! A single [Kind] enum covers both the parser-private control kinds
//! (begin/end bracketing, parameter polarity, directives) and the externally
//! visible tag kinds.  Keywords of syntactic interest are associated with
//! their kind through the derived `KEYWORDS` table, together with a validity
//! mask saying which languages know them.  The full IEEE keyword lists map
//! to [Kind::Ignore] and the compiler directive lists to [Kind::Directive];
//! they only apply where the associator table has no claim, so a keyword
//! like `function` keeps its specific kind.

use crate::lang::Lang;
use vtags_keyword_derive::KeywordTable;

/// Verilog bit in keyword validity masks.
const V: u32 = 1 << 0;
/// SystemVerilog bit in keyword validity masks.
const SV: u32 = 1 << 1;

fn lang_bit(lang: Lang) -> u32 {
    match lang {
        Lang::Verilog => V,
        Lang::SystemVerilog => SV,
    }
}

/// Classification of one scanned word.
#[derive(Copy, Clone, Eq, PartialEq, Debug, KeywordTable)]
pub enum Kind {
    /// Not a keyword, and not identifier-shaped either.
    Undefined,
    /// An identifier-shaped word with no keyword meaning.
    Identifier,
    /// A keyword of no syntactic interest to the scanner.
    Ignore,
    #[keyword("`define", SV | V)]
    Define,
    /// A compiler directive other than `define.
    Directive,
    #[keyword("begin", SV | V)]
    #[keyword("fork", SV | V)]
    Begin,
    #[keyword("end", SV | V)]
    #[keyword("join", SV | V)]
    #[keyword("join_any", SV)]
    #[keyword("join_none", SV)]
    End,
    /// A design element terminator (endmodule, endclass, ...).
    #[keyword("endfunction", SV | V)]
    #[keyword("endmodule", SV | V)]
    #[keyword("endtask", SV | V)]
    #[keyword("endclass", SV)]
    #[keyword("endgroup", SV)]
    #[keyword("endinterface", SV)]
    #[keyword("endpackage", SV)]
    #[keyword("endprogram", SV)]
    #[keyword("endproperty", SV)]
    EndDesignElem,
    #[keyword("localparam", SV | V)]
    LocalParam,
    #[keyword("parameter", SV | V)]
    Parameter,

    // Tag kinds.
    #[keyword("specparam", SV | V)]
    Constant,
    #[keyword("event", SV | V)]
    Event,
    #[keyword("function", SV | V)]
    Function,
    #[keyword("module", SV | V)]
    Module,
    #[keyword("supply0", SV | V)]
    #[keyword("supply1", SV | V)]
    #[keyword("tri", SV | V)]
    #[keyword("tri0", SV | V)]
    #[keyword("tri1", SV | V)]
    #[keyword("triand", SV | V)]
    #[keyword("trior", SV | V)]
    #[keyword("trireg", SV | V)]
    #[keyword("uwire", SV | V)]
    #[keyword("wand", SV | V)]
    #[keyword("wire", SV | V)]
    #[keyword("wor", SV | V)]
    #[keyword("interconnect", SV)]
    Net,
    #[keyword("inout", SV | V)]
    #[keyword("input", SV | V)]
    #[keyword("output", SV | V)]
    #[keyword("ref", SV)]
    Port,
    #[keyword("genvar", SV | V)]
    #[keyword("integer", SV | V)]
    #[keyword("real", SV | V)]
    #[keyword("realtime", SV | V)]
    #[keyword("reg", SV | V)]
    #[keyword("time", SV | V)]
    #[keyword("bit", SV)]
    #[keyword("byte", SV)]
    #[keyword("chandle", SV)]
    #[keyword("int", SV)]
    #[keyword("logic", SV)]
    #[keyword("longint", SV)]
    #[keyword("shortint", SV)]
    #[keyword("shortreal", SV)]
    #[keyword("string", SV)]
    #[keyword("type", SV)]
    #[keyword("var", SV)]
    #[keyword("void", SV)]
    Register,
    #[keyword("task", SV | V)]
    Task,
    Block,
    #[keyword("assert", SV)]
    #[keyword("assume", SV)]
    #[keyword("cover", SV)]
    Assertion,
    #[keyword("class", SV)]
    Class,
    #[keyword("covergroup", SV)]
    Covergroup,
    #[keyword("enum", SV)]
    Enum,
    #[keyword("interface", SV)]
    Interface,
    #[keyword("modport", SV)]
    Modport,
    #[keyword("package", SV)]
    Package,
    #[keyword("program", SV)]
    Program,
    #[keyword("extern", SV)]
    #[keyword("pure", SV)]
    Prototype,
    #[keyword("property", SV)]
    #[keyword("sequence", SV)]
    Property,
    #[keyword("struct", SV)]
    #[keyword("union", SV)]
    Struct,
    #[keyword("typedef", SV)]
    Typedef,
}

impl Kind {
    /// The tag-kind name, as used in output and when matching `end<name>`
    /// terminators.  None for the parser-private kinds.
    pub fn tag_name(self) -> Option<&'static str> {
        Some(match self {
            Kind::Constant => "constant",
            Kind::Event => "event",
            Kind::Function => "function",
            Kind::Module => "module",
            Kind::Net => "net",
            Kind::Port => "port",
            Kind::Register => "register",
            Kind::Task => "task",
            Kind::Block => "block",
            Kind::Assertion => "assert",
            Kind::Class => "class",
            Kind::Covergroup => "covergroup",
            Kind::Enum => "enum",
            Kind::Interface => "interface",
            Kind::Modport => "modport",
            Kind::Package => "package",
            Kind::Program => "program",
            Kind::Prototype => "prototype",
            Kind::Property => "property",
            Kind::Struct => "struct",
            Kind::Typedef => "typedef",
            _ => return None,
        })
    }

    /// True if this kind admits a body and therefore opens a scope.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Kind::Module
                | Kind::Task
                | Kind::Function
                | Kind::Block
                | Kind::Class
                | Kind::Covergroup
                | Kind::Interface
                | Kind::Package
                | Kind::Program
                | Kind::Property
                | Kind::Typedef
                | Kind::Enum
        )
    }

    /// Typedef and enum scopes admit no body in this scanner; they exist
    /// only while their queued members are emitted.
    pub fn is_temp_context(self) -> bool {
        matches!(self, Kind::Typedef | Kind::Enum)
    }

    /// True for kinds whose header port list is walked for port tags.
    pub fn has_simple_port_list(self) -> bool {
        matches!(
            self,
            Kind::Task
                | Kind::Function
                | Kind::Class
                | Kind::Interface
                | Kind::Program
                | Kind::Property
        )
    }
}

/// One entry of a per-language kind table.
#[derive(Debug)]
pub struct KindDef {
    pub kind: Kind,
    pub letter: char,
    pub description: &'static str,
    /// Whether tags of this kind are emitted by default.
    pub enabled: bool,
}

pub static VERILOG_KIND_TABLE: &[KindDef] = &[
    KindDef { kind: Kind::Constant, letter: 'c', description: "constants (define, parameter, specparam)", enabled: true },
    KindDef { kind: Kind::Event, letter: 'e', description: "events", enabled: true },
    KindDef { kind: Kind::Function, letter: 'f', description: "functions", enabled: true },
    KindDef { kind: Kind::Module, letter: 'm', description: "modules", enabled: true },
    KindDef { kind: Kind::Net, letter: 'n', description: "net data types", enabled: true },
    KindDef { kind: Kind::Port, letter: 'p', description: "ports", enabled: true },
    KindDef { kind: Kind::Register, letter: 'r', description: "register data types", enabled: true },
    KindDef { kind: Kind::Task, letter: 't', description: "tasks", enabled: true },
    KindDef { kind: Kind::Block, letter: 'b', description: "blocks", enabled: true },
];

pub static SYSTEM_VERILOG_KIND_TABLE: &[KindDef] = &[
    KindDef { kind: Kind::Constant, letter: 'c', description: "constants (define, parameter, specparam, enum values)", enabled: true },
    KindDef { kind: Kind::Event, letter: 'e', description: "events", enabled: true },
    KindDef { kind: Kind::Function, letter: 'f', description: "functions", enabled: true },
    KindDef { kind: Kind::Module, letter: 'm', description: "modules", enabled: true },
    KindDef { kind: Kind::Net, letter: 'n', description: "net data types", enabled: true },
    KindDef { kind: Kind::Port, letter: 'p', description: "ports", enabled: true },
    KindDef { kind: Kind::Register, letter: 'r', description: "register data types", enabled: true },
    KindDef { kind: Kind::Task, letter: 't', description: "tasks", enabled: true },
    KindDef { kind: Kind::Block, letter: 'b', description: "blocks", enabled: true },
    KindDef { kind: Kind::Assertion, letter: 'A', description: "assertions", enabled: true },
    KindDef { kind: Kind::Class, letter: 'C', description: "classes", enabled: true },
    KindDef { kind: Kind::Covergroup, letter: 'V', description: "covergroups", enabled: true },
    KindDef { kind: Kind::Enum, letter: 'E', description: "enumerators", enabled: true },
    KindDef { kind: Kind::Interface, letter: 'I', description: "interfaces", enabled: true },
    KindDef { kind: Kind::Modport, letter: 'M', description: "modports", enabled: true },
    KindDef { kind: Kind::Package, letter: 'K', description: "packages", enabled: true },
    KindDef { kind: Kind::Program, letter: 'P', description: "programs", enabled: true },
    KindDef { kind: Kind::Prototype, letter: 'Q', description: "prototypes", enabled: false },
    KindDef { kind: Kind::Property, letter: 'R', description: "properties", enabled: true },
    KindDef { kind: Kind::Struct, letter: 'S', description: "structs and unions", enabled: true },
    KindDef { kind: Kind::Typedef, letter: 'T', description: "type declarations", enabled: true },
];

/// The kind table of a language.
pub fn kind_table(lang: Lang) -> &'static [KindDef] {
    match lang {
        Lang::Verilog => VERILOG_KIND_TABLE,
        Lang::SystemVerilog => SYSTEM_VERILOG_KIND_TABLE,
    }
}

/// A set of kinds, used for kind enablement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KindSet(u32);

impl KindSet {
    pub const EMPTY: KindSet = KindSet(0);

    /// The kinds a language's table enables by default.
    pub fn default_for(lang: Lang) -> KindSet {
        let mut set = KindSet::EMPTY;
        for def in kind_table(lang) {
            if def.enabled {
                set.insert(def.kind);
            }
        }
        set
    }

    pub fn insert(&mut self, kind: Kind) {
        self.0 |= 1 << kind as u32;
    }

    pub fn remove(&mut self, kind: Kind) {
        self.0 &= !(1 << kind as u32);
    }

    pub fn contains(self, kind: Kind) -> bool {
        self.0 & (1 << kind as u32) != 0
    }
}

// IEEE Std 1364-2005 LRM, Appendix B "List of Keywords".  Sorted, for
// binary search.
static VERILOG_KEYWORDS: &[&str] = &[
    "always", "and", "assign", "automatic", "begin", "buf", "bufif0",
    "bufif1", "case", "casex", "casez", "cell", "cmos", "config",
    "deassign", "default", "defparam", "design", "disable", "edge",
    "else", "end", "endcase", "endconfig", "endfunction", "endgenerate",
    "endmodule", "endprimitive", "endspecify", "endtable", "endtask",
    "event", "for", "force", "forever", "fork", "function", "generate",
    "genvar", "highz0", "highz1", "if", "ifnone", "incdir", "include",
    "initial", "inout", "input", "instance", "integer", "join", "large",
    "liblist", "library", "localparam", "macromodule", "medium", "module",
    "nand", "negedge", "nmos", "nor", "noshowcancelled", "not", "notif0",
    "notif1", "or", "output", "parameter", "pmos", "posedge", "primitive",
    "pull0", "pull1", "pulldown", "pullup", "pulsestyle_ondetect",
    "pulsestyle_onevent", "rcmos", "real", "realtime", "reg", "release",
    "repeat", "rnmos", "rpmos", "rtran", "rtranif0", "rtranif1",
    "scalared", "showcancelled", "signed", "small", "specify",
    "specparam", "strong0", "strong1", "supply0", "supply1", "table",
    "task", "time", "tran", "tranif0", "tranif1", "tri", "tri0", "tri1",
    "triand", "trior", "trireg", "unsigned", "use", "uwire", "vectored",
    "wait", "wand", "weak0", "weak1", "while", "wire", "wor", "xnor", "xor",
];

// IEEE Std 1800-2017 LRM, Annex B "Keywords".  Sorted, for binary search.
static SYSTEM_VERILOG_KEYWORDS: &[&str] = &[
    "accept_on", "alias", "always", "always_comb", "always_ff",
    "always_latch", "and", "assert", "assign", "assume", "automatic",
    "before", "begin", "bind", "bins", "binsof", "bit", "break", "buf",
    "bufif0", "bufif1", "byte", "case", "casex", "casez", "cell",
    "chandle", "checker", "class", "clocking", "cmos", "config", "const",
    "constraint", "context", "continue", "cover", "covergroup",
    "coverpoint", "cross", "deassign", "default", "defparam", "design",
    "disable", "dist", "do", "edge", "else", "end", "endcase",
    "endchecker", "endclass", "endclocking", "endconfig", "endfunction",
    "endgenerate", "endgroup", "endinterface", "endmodule", "endpackage",
    "endprimitive", "endprogram", "endproperty", "endsequence",
    "endspecify", "endtable", "endtask", "enum", "event", "eventually",
    "expect", "export", "extends", "extern", "final", "first_match",
    "for", "force", "foreach", "forever", "fork", "forkjoin", "function",
    "generate", "genvar", "global", "highz0", "highz1", "if", "iff",
    "ifnone", "ignore_bins", "illegal_bins", "implements", "implies",
    "import", "incdir", "include", "initial", "inout", "input", "inside",
    "instance", "int", "integer", "interconnect", "interface",
    "intersect", "join", "join_any", "join_none", "large", "let",
    "liblist", "library", "local", "localparam", "logic", "longint",
    "macromodule", "matches", "medium", "modport", "module", "nand",
    "negedge", "nettype", "new", "nexttime", "nmos", "nor",
    "noshowcancelled", "not", "notif0", "notif1", "null", "or", "output",
    "package", "packed", "parameter", "pmos", "posedge", "primitive",
    "priority", "program", "property", "protected", "pull0", "pull1",
    "pulldown", "pullup", "pulsestyle_ondetect", "pulsestyle_onevent",
    "pure", "rand", "randc", "randcase", "randsequence", "rcmos", "real",
    "realtime", "ref", "reg", "reject_on", "release", "repeat",
    "restrict", "return", "rnmos", "rpmos", "rtran", "rtranif0",
    "rtranif1", "s_always", "s_eventually", "s_nexttime", "s_until",
    "s_until_with", "scalared", "sequence", "shortint", "shortreal",
    "showcancelled", "signed", "small", "soft", "solve", "specify",
    "specparam", "static", "string", "strong", "strong0", "strong1",
    "struct", "super", "supply0", "supply1", "sync_accept_on",
    "sync_reject_on", "table", "tagged", "task", "this", "throughout",
    "time", "timeprecision", "timeunit", "tran", "tranif0", "tranif1",
    "tri", "tri0", "tri1", "triand", "trior", "trireg", "type", "typedef",
    "union", "unique", "unique0", "unsigned", "until", "until_with",
    "untyped", "use", "uwire", "var", "vectored", "virtual", "void",
    "wait", "wait_order", "wand", "weak", "weak0", "weak1", "while",
    "wildcard", "wire", "with", "within", "wor", "xnor", "xor",
];

// IEEE Std 1364-2005 LRM, "19. Compiler directives".  Sorted.
static VERILOG_DIRECTIVES: &[&str] = &[
    "`begin_keywords", "`celldefine", "`default_nettype", "`define",
    "`else", "`elsif", "`end_keywords", "`endcelldefine", "`endif",
    "`ifdef", "`ifndef", "`include", "`line", "`nounconnected_drive",
    "`pragma", "`resetall", "`timescale", "`unconnected_drive", "`undef",
];

// IEEE Std 1800-2017 LRM, "22. Compiler directives".  Sorted.
static SYSTEM_VERILOG_DIRECTIVES: &[&str] = &[
    "`__LINE__", "`begin_keywords", "`celldefine", "`default_nettype",
    "`define", "`else", "`elsif", "`end_keywords", "`endcelldefine",
    "`endif", "`ifdef", "`ifndef", "`include", "`line",
    "`nounconnected_drive", "`pragma", "`resetall", "`timescale",
    "`unconnected_drive", "`undef", "`undefineall",
];

/// Looks up the kind of a word for the active language.  The associator
/// table takes precedence; the bulk keyword and directive lists only apply
/// where it has no claim.
pub fn lookup_keyword(name: &str, lang: Lang) -> Kind {
    if let Some(&(kind, langs)) = Kind::KEYWORDS.get(name) {
        if langs & lang_bit(lang) != 0 {
            return kind;
        }
    }
    let (keywords, directives) = match lang {
        Lang::Verilog => (VERILOG_KEYWORDS, VERILOG_DIRECTIVES),
        Lang::SystemVerilog => (SYSTEM_VERILOG_KEYWORDS, SYSTEM_VERILOG_DIRECTIVES),
    };
    if keywords.binary_search(&name).is_ok() {
        return Kind::Ignore;
    }
    if directives.binary_search(&name).is_ok() {
        return Kind::Directive;
    }
    Kind::Undefined
}

#[cfg(test)]
mod tests;
