use super::*;

#[test]
fn test_lookup_associator() {
    for lang in [Lang::Verilog, Lang::SystemVerilog] {
        assert_eq!(lookup_keyword("module", lang), Kind::Module);
        assert_eq!(lookup_keyword("wire", lang), Kind::Net);
        assert_eq!(lookup_keyword("reg", lang), Kind::Register);
        assert_eq!(lookup_keyword("parameter", lang), Kind::Parameter);
        assert_eq!(lookup_keyword("localparam", lang), Kind::LocalParam);
        assert_eq!(lookup_keyword("endmodule", lang), Kind::EndDesignElem);
        assert_eq!(lookup_keyword("begin", lang), Kind::Begin);
        assert_eq!(lookup_keyword("fork", lang), Kind::Begin);
        assert_eq!(lookup_keyword("join", lang), Kind::End);
        assert_eq!(lookup_keyword("`define", lang), Kind::Define);
    }
}

#[test]
fn test_lookup_system_verilog_only() {
    assert_eq!(lookup_keyword("class", Lang::SystemVerilog), Kind::Class);
    assert_eq!(lookup_keyword("class", Lang::Verilog), Kind::Undefined);
    assert_eq!(lookup_keyword("logic", Lang::SystemVerilog), Kind::Register);
    assert_eq!(lookup_keyword("logic", Lang::Verilog), Kind::Undefined);
    assert_eq!(lookup_keyword("extern", Lang::SystemVerilog), Kind::Prototype);
    assert_eq!(lookup_keyword("sequence", Lang::SystemVerilog), Kind::Property);
    assert_eq!(lookup_keyword("join_any", Lang::Verilog), Kind::Undefined);
}

#[test]
fn test_lookup_bulk() {
    for lang in [Lang::Verilog, Lang::SystemVerilog] {
        assert_eq!(lookup_keyword("always", lang), Kind::Ignore);
        assert_eq!(lookup_keyword("posedge", lang), Kind::Ignore);
        assert_eq!(lookup_keyword("signed", lang), Kind::Ignore);
        assert_eq!(lookup_keyword("`ifdef", lang), Kind::Directive);
        assert_eq!(lookup_keyword("`timescale", lang), Kind::Directive);
    }
    assert_eq!(lookup_keyword("constraint", Lang::SystemVerilog), Kind::Ignore);
    assert_eq!(lookup_keyword("constraint", Lang::Verilog), Kind::Undefined);
    assert_eq!(lookup_keyword("`undefineall", Lang::SystemVerilog), Kind::Directive);
    assert_eq!(lookup_keyword("`undefineall", Lang::Verilog), Kind::Undefined);
}

#[test]
fn test_lookup_precedence() {
    // Keywords of syntactic interest keep their kind even though they also
    // appear in the bulk IEEE lists.
    for lang in [Lang::Verilog, Lang::SystemVerilog] {
        assert_eq!(lookup_keyword("event", lang), Kind::Event);
        assert_eq!(lookup_keyword("end", lang), Kind::End);
        assert_eq!(lookup_keyword("function", lang), Kind::Function);
    }
}

#[test]
fn test_lookup_unknown() {
    assert_eq!(lookup_keyword("some_signal", Lang::SystemVerilog), Kind::Undefined);
    assert_eq!(lookup_keyword("`MY_MACRO", Lang::SystemVerilog), Kind::Undefined);
}

#[test]
fn test_bulk_lists_sorted() {
    // The lookup binary-searches these.
    for list in [
        VERILOG_KEYWORDS,
        SYSTEM_VERILOG_KEYWORDS,
        VERILOG_DIRECTIVES,
        SYSTEM_VERILOG_DIRECTIVES,
    ] {
        assert!(list.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_kind_tables() {
    for lang in [Lang::Verilog, Lang::SystemVerilog] {
        let table = kind_table(lang);
        for (i, def) in table.iter().enumerate() {
            assert!(def.kind.tag_name().is_some());
            for other in &table[i + 1..] {
                assert_ne!(def.letter, other.letter);
                assert_ne!(def.kind, other.kind);
            }
        }
    }
    assert_eq!(VERILOG_KIND_TABLE.len(), 9);
    assert_eq!(SYSTEM_VERILOG_KIND_TABLE.len(), 21);
}

#[test]
fn test_kind_set_defaults() {
    let set = KindSet::default_for(Lang::SystemVerilog);
    assert!(set.contains(Kind::Module));
    assert!(set.contains(Kind::Class));
    // Prototypes are off by default.
    assert!(!set.contains(Kind::Prototype));
    let set = KindSet::default_for(Lang::Verilog);
    assert!(set.contains(Kind::Net));
    assert!(!set.contains(Kind::Class));
}

#[test]
fn test_kind_set_ops() {
    let mut set = KindSet::EMPTY;
    assert!(!set.contains(Kind::Task));
    set.insert(Kind::Task);
    set.insert(Kind::Block);
    assert!(set.contains(Kind::Task));
    assert!(set.contains(Kind::Block));
    set.remove(Kind::Task);
    assert!(!set.contains(Kind::Task));
    assert!(set.contains(Kind::Block));
}

#[test]
fn test_container_kinds() {
    assert!(Kind::Module.is_container());
    assert!(Kind::Class.is_container());
    assert!(Kind::Typedef.is_container());
    assert!(!Kind::Modport.is_container());
    assert!(!Kind::Net.is_container());
    assert!(Kind::Typedef.is_temp_context());
    assert!(Kind::Enum.is_temp_context());
    assert!(!Kind::Module.is_temp_context());
}
