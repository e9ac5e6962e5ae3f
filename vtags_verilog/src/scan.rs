//! The scanner core: a single forward pass over the sanitized char stream,
//! recognizing a curated set of declaration shapes and emitting tags as it
//! goes.  No AST is built; whatever the recognizers do not understand is
//! stepped over with the balanced-bracket and to-semicolon skips, leaving
//! the stream in a state the outer loop can continue from.
//!
//! Scopes are tracked on an explicit stack.  A container tag (module,
//! class, function, labeled block, ...) pushes one frame; the frame is
//! popped when its matching end token arrives, or at end of input.

use crate::kind::{lookup_keyword, Kind};
use crate::lang::Lang;
use crate::reader::Reader;
use crate::tag::{ScanOptions, Tag, TagSink};
use crate::token::{is_word_start, Token};
use log::{debug, trace};
use vtags_basics::source::SourceChunk;

/// A scope frame.  The bottom of the stack is a sentinel with
/// [Kind::Undefined], so a current context always exists.
struct Context {
    kind: Kind,
    /// Dot-joined full path of the scope.
    name: String,
    /// Unnamed begin/end depth.  Only meaningful for block scopes.
    nest_level: i32,
    /// Kind of the most recent tag emitted into this scope.
    last_kind: Kind,
    /// The most recently seen `: label` in this scope; a following
    /// concurrent assertion is named after it.
    block_name: String,
    /// Set between an extern/pure/typedef-class hint and the next `;`.
    prototype: bool,
    /// An out-of-body Class::method scope, popped together with the method
    /// scope itself.
    class_scope: bool,
    /// The design element already had a #(...) list; parameter declarations
    /// inside it are not overridable.
    has_param_list: bool,
}

impl Context {
    fn new(kind: Kind, name: String) -> Self {
        Context {
            kind,
            name,
            nest_level: 0,
            last_kind: Kind::Undefined,
            block_name: String::new(),
            prototype: false,
            class_scope: false,
            has_param_list: false,
        }
    }
}

struct Scanner<'sm, 'a> {
    reader: Reader<'sm>,
    lang: Lang,
    options: &'a ScanOptions,
    sink: &'a dyn TagSink,
    /// The scope stack; stack[0] is the sentinel root.
    stack: Vec<Context>,
    /// Enum members found inside `{ ... }`, waiting for the enclosing tag
    /// to create its scope.  Flushed at every top-level `;`.
    tag_contents: Vec<Token>,
}

/// Scans one source file, emitting tags into the sink.  All per-file state
/// lives in the scanner, so this can be called once per input file.
pub fn scan_chunk(chunk: &SourceChunk, lang: Lang, options: &ScanOptions, sink: &dyn TagSink) {
    let mut scanner = Scanner {
        reader: Reader::new(chunk),
        lang,
        options,
        sink,
        stack: vec![Context::new(Kind::Undefined, String::new())],
        tag_contents: Vec::new(),
    };
    scanner.scan();
}

impl<'sm, 'a> Scanner<'sm, 'a> {
    fn ctx(&self) -> &Context {
        self.stack.last().unwrap()
    }

    fn ctx_mut(&mut self) -> &mut Context {
        self.stack.last_mut().unwrap()
    }

    fn create_context(&mut self, kind: Kind, name: &str) {
        let ctx = self.ctx();
        let full = if ctx.kind != Kind::Undefined {
            format!("{}.{}", ctx.name, name)
        } else {
            name.to_owned()
        };
        debug!("created context {} (kind {:?})", full, kind);
        self.stack.push(Context::new(kind, full));
    }

    fn drop_context(&mut self) {
        assert!(self.stack.len() > 1);
        let ctx = self.stack.pop().unwrap();
        debug!("dropped context {}", ctx.name);
    }

    /// The end-of-container sink: pops the current scope if the end token
    /// matches it.
    fn drop_end_context(&mut self, token: &mut Token) {
        trace!(
            "current context {} (kind {:?}, nest {})",
            self.ctx().name,
            self.ctx().kind,
            self.ctx().nest_level
        );
        let ctx_kind = self.ctx().kind;
        if (ctx_kind == Kind::Covergroup && token.name == "endgroup")
            || (ctx_kind == Kind::Block
                && self.ctx().nest_level == 0
                && token.kind == Kind::End)
        {
            self.drop_context();
            self.find_block_name(token);
        } else if let Some(kind_name) = ctx_kind.tag_name() {
            if token.name.strip_prefix("end") == Some(kind_name) {
                self.drop_context();
                self.find_block_name(token);
                if self.ctx().class_scope {
                    debug!("dropping local context {}", self.ctx().name);
                    self.drop_context();
                }
            }
        }
    }

    /// After a begin or end token, tries to read a trailing `: label` into
    /// the token.
    fn find_block_name(&mut self, token: &mut Token) -> bool {
        let c = self.reader.next_nonwhite();
        if c == Some(':') {
            let c = self.reader.next_nonwhite();
            self.reader.read_word(c, token)
        } else {
            self.reader.unget(c);
            false
        }
    }

    fn create_tag(&mut self, token: &mut Token, kind: Kind) {
        let mut kind = kind;
        if kind == Kind::Undefined || kind == Kind::Identifier {
            trace!("unexpected token kind {:?}", kind);
            return;
        }

        if kind == Kind::LocalParam {
            kind = Kind::Constant;
        } else if kind == Kind::Parameter {
            kind = Kind::Constant;
            // LRM 2017 6.20.1: parameters of classes and packages, and
            // parameters declared after a parameter port list, cannot be
            // overridden.
            let ctx = self.ctx();
            if ctx.kind != Kind::Class && ctx.kind != Kind::Package && !ctx.has_param_list {
                token.parameter = true;
            }
        }

        // Whether the tag opens a scope is settled before any prototype
        // rewrite.
        let container = kind.is_container();
        if self.ctx().prototype {
            kind = Kind::Prototype;
        }

        if token.name.is_empty() {
            trace!("unexpected empty token");
            return;
        }
        if !self.options.kind_enabled(kind) {
            trace!("kind {:?} disabled", kind);
            return;
        }

        let line = self.reader.chunk().get_line_info(token.pos).line_num;
        let scope = if self.ctx().kind != Kind::Undefined {
            Some((self.ctx().kind, self.ctx().name.clone()))
        } else {
            None
        };
        debug!(
            "adding tag {} (kind {:?}) in {}",
            token.name,
            kind,
            scope.as_ref().map_or("<root>", |s| s.1.as_str())
        );
        if scope.is_some() {
            self.ctx_mut().last_kind = kind;
        }
        let tag = Tag {
            name: token.name.clone(),
            kind,
            line,
            pos: token.pos,
            scope,
            inheritance: if token.inheritance.is_empty() {
                None
            } else {
                Some(token.inheritance.clone())
            },
            parameter: token.parameter,
            qualified: false,
        };
        let qualified = if self.options.qualified_tags {
            tag.scope.as_ref().map(|(_, scope_name)| {
                let mut q = tag.clone();
                q.name = format!("{}.{}", scope_name, tag.name);
                q.qualified = true;
                q
            })
        } else {
            None
        };
        self.sink.emit(tag);
        if let Some(q) = qualified {
            self.sink.emit(q);
        }

        if container {
            self.create_context(kind, &token.name);
            // The queued enum members become children of the new scope.
            // The queue survives until the terminating `;`, so every name
            // declared for the type gets the members.
            if !self.tag_contents.is_empty() {
                debug!("including {} queued members", self.tag_contents.len());
                let mut contents = self.tag_contents.clone();
                for content in &mut contents {
                    let content_kind = content.kind;
                    self.create_tag(content, content_kind);
                }
            }
            if self.ctx().kind.is_temp_context() {
                self.drop_context();
            }
        }

        token.inheritance.clear();
    }

    fn process_begin(&mut self, token: &mut Token) {
        self.ctx_mut().nest_level += 1;
        if self.find_block_name(token) {
            debug!("found block {}", token.name);
            self.create_tag(token, Kind::Block);
        }
    }

    fn process_end(&mut self, token: &mut Token) {
        self.ctx_mut().nest_level -= 1;
        if self.find_block_name(token)
            && self.ctx().kind == Kind::Block
            && self.ctx().nest_level <= 1
        {
            self.drop_context();
        }
    }

    /// Walks a port list.  The walk ends at the `;` after the closing
    /// paren, which terminates the whole declaration; the last word of each
    /// declarator is the port name.
    fn process_port_list(&mut self, token: &mut Token, c: Option<char>) {
        let mut c = self.reader.skip_white(c);
        if c == Some('(') {
            c = self.reader.next_nonwhite();
            while !matches!(c, None | Some(';')) {
                c = self.reader.skip_dimension(c);
                match c {
                    Some('(') => c = self.reader.skip_past_match('(', ')'),
                    Some('{') => c = self.reader.skip_past_match('{', '}'),
                    Some('`') => c = self.skip_macro(c),
                    Some('=') => {
                        // A default value; find the next port or the end of
                        // the list.
                        let n = self.reader.next_nonwhite();
                        c = self.reader.skip_expression(n);
                    }
                    _ => {
                        if self.reader.read_word(c, token) {
                            token.update_kind(self.lang);
                            if token.kind == Kind::Identifier {
                                // Only the last word of a declarator is the
                                // port name; an earlier one can be a type.
                                c = self.reader.next_nonwhite();
                                if !matches!(c, Some(ch) if is_word_start(ch) && ch != '`') {
                                    debug!("found port {}", token.name);
                                    self.create_tag(token, Kind::Port);
                                }
                            } else {
                                c = self.reader.next_nonwhite();
                            }
                        } else {
                            c = self.reader.next_nonwhite();
                        }
                    }
                }
            }
            if c != Some(';') {
                trace!("port list ended without `;`");
            }
        }
        if c.is_some() {
            self.reader.unget(c);
        }
    }

    fn skip_parameter_assignment(&mut self, c: Option<char>) -> Option<char> {
        if c == Some('#') {
            let mut c = self.reader.next_nonwhite();
            if c == Some('(') {
                let n = self.reader.skip_past_match('(', ')');
                c = self.reader.skip_white(n);
            }
            c
        } else {
            c
        }
    }

    /// Functions may carry a return type in front of the name; tasks are
    /// handled the same way, although they cannot return a value.  The last
    /// word before `(` or `;` is the name.
    fn process_function(&mut self, token: &mut Token) {
        let kind = token.kind; // Function or Task
        let mut c = self.reader.next_nonwhite();
        loop {
            self.reader.read_word(c, token);
            c = self.reader.next_nonwhite();
            // A class-typed return can carry a parameter override:
            //   function uvm_port_base #(IF) get_if(int index = 0);
            c = self.skip_parameter_assignment(c);

            // Class type prefixes name an out-of-body method; give it a
            // scope of its own.
            if self.lang == Lang::SystemVerilog && c == Some(':') {
                let c2 = self.reader.next();
                if c2 == Some(':') {
                    debug!("found method of class {}", token.name);
                    self.create_context(Kind::Class, &token.name);
                    self.ctx_mut().class_scope = true;
                } else {
                    self.reader.unget(c2);
                }
                c = Some(':');
            }
            if matches!(c, None | Some('(' | ';')) {
                break;
            }
        }
        if !token.name.is_empty() {
            debug!("found {}: {}", if kind == Kind::Task { "task" } else { "function" }, token.name);
            self.create_tag(token, kind);
            self.process_port_list(token, c);
        }
    }

    fn process_enum(&mut self, token: &mut Token) {
        let mut enum_token = token.clone(); // carries Enum or Typedef

        // Read the base type words, if any.
        let mut c = self.reader.next_nonwhite();
        let mut last_was_identifier = false;
        while self.reader.read_word(c, token) {
            token.update_kind(self.lang);
            last_was_identifier = token.kind == Kind::Identifier;
            trace!("enum type word {}", token.name);
            c = self.reader.next_nonwhite();
        }

        // Skip the bus width.
        c = self.reader.skip_dimension(c);

        if c == Some('{') {
            // Search enum members.
            c = self.reader.next_nonwhite();
            while self.reader.read_word(c, token) {
                token.kind = Kind::Constant;
                self.tag_contents.push(token.clone());
                trace!("queued enum member {}", token.name);

                // Skip member ranges.
                let n = self.reader.next_nonwhite();
                c = self.reader.skip_dimension(n);

                // Skip value assignments, including concatenations.
                if c == Some('=') {
                    while !matches!(c, None | Some('}' | ',')) {
                        c = self.reader.next_nonwhite();
                        if c == Some('{') {
                            let n = self.reader.skip_past_match('{', '}');
                            c = self.reader.skip_white(n);
                        }
                    }
                }
                if c == Some(',') {
                    c = self.reader.next_nonwhite();
                }
                if c == Some('}') {
                    c = self.reader.next_nonwhite();
                    break;
                }
            }
        } else if last_was_identifier {
            // No member list: a forward declaration.
            debug!("prototype enum {}", token.name);
            self.create_tag(token, Kind::Prototype);
            return;
        }

        // The identifiers that follow become the enum (or typedef) tags.
        debug!("find enum tags for {}", enum_token.name);
        self.tag_name_list(&mut enum_token, c);
    }

    fn process_struct(&mut self, token: &mut Token) {
        let kind = token.kind; // Struct or Typedef
        let mut c = self.reader.next_nonwhite();

        // Skip packed, signed, and unsigned.
        while self.reader.read_word(c, token) {
            c = self.reader.next_nonwhite();
        }

        if c == Some('{') {
            // Struct contents are not parsed for fields.
            let n = self.reader.skip_past_match('{', '}');
            c = self.reader.skip_white(n);
        } else {
            debug!("prototype struct {}", token.name);
            self.create_tag(token, Kind::Prototype);
            return;
        }

        c = self.reader.skip_dimension(c);
        token.kind = kind;
        self.tag_name_list(token, c);
    }

    fn process_typedef(&mut self, token: &mut Token) {
        let mut c = self.reader.next_nonwhite();
        if self.reader.read_word(c, token) {
            token.update_kind(self.lang);
            match token.kind {
                Kind::Interface => {
                    // Expecting `typedef interface class`.
                    let c2 = self.reader.next_nonwhite();
                    self.reader.read_word(c2, token);
                    token.update_kind(self.lang);
                    self.ctx_mut().prototype = true;
                }
                Kind::Class => {
                    // A typedef class is just a prototype.
                    self.ctx_mut().prototype = true;
                }
                Kind::Enum => {
                    token.kind = Kind::Typedef;
                    self.process_enum(token);
                    return;
                }
                Kind::Struct => {
                    token.kind = Kind::Typedef;
                    self.process_struct(token);
                    return;
                }
                _ => (),
            }
            c = self.reader.next_nonwhite();
        }

        // Skip signed or unsigned.
        if self.reader.read_word(c, token) {
            c = self.reader.next_nonwhite();
        }

        // Skip the bus width.
        c = self.reader.skip_dimension(c);

        // Skip remaining type words; the last word read is the name.
        while self.reader.read_word(c, token) {
            c = self.reader.next_nonwhite();
        }

        // Skip past a class parameter override.
        c = self.skip_parameter_assignment(c);

        if !self.reader.read_word(c, token) {
            self.reader.unget(c);
            // An empty typedef is a forward declaration, i.e. a prototype.
            if token.kind == Kind::Identifier {
                self.ctx_mut().prototype = true;
            }
        }

        // The last identifier makes the tag, always with kind typedef.
        self.create_tag(token, Kind::Typedef);
    }

    /// Collects the parameters of a `#(...)` list.  The parameter /
    /// localparam polarity toggles as those keywords appear in the list;
    /// user-defined types are stepped over.
    fn process_parameter_list(&mut self, token: &mut Token, c: Option<char>) -> Vec<Token> {
        let mut params = Vec::new();
        let mut parameter = true; // "parameter" unless the list says otherwise
        let mut c = c;
        if c == Some('#') {
            c = self.reader.next_nonwhite();
            if c == Some('(') {
                loop {
                    c = self.reader.next_nonwhite();
                    if self.reader.read_word(c, token) {
                        token.update_kind(self.lang);
                        trace!("parameter list word {}", token.name);
                        if token.kind == Kind::Identifier {
                            c = self.reader.next_nonwhite();
                            if matches!(c, Some(',' | ')' | '=')) {
                                let mut param = token.clone();
                                param.kind = Kind::Constant;
                                param.parameter = parameter;
                                params.push(param);
                                c = self.reader.skip_expression(c);
                            }
                        } else if token.kind == Kind::Parameter {
                            parameter = true;
                        } else if token.kind == Kind::LocalParam {
                            parameter = false;
                        }
                    } else if c == Some('[') {
                        c = self.reader.skip_dimension(c);
                        self.reader.unget(c);
                    }
                    if matches!(c, None | Some(')')) {
                        break;
                    }
                }
                c = self.reader.next_nonwhite();
            }
        }
        self.reader.unget(c);
        params
    }

    fn process_class(&mut self, token: &mut Token) {
        let mut c = self.reader.next_nonwhite();
        if !self.reader.read_word(c, token) {
            trace!("unexpected input: class name expected");
            return;
        }
        let mut class_token = token.clone();
        c = self.reader.next_nonwhite();

        // Find the class parameter list.
        let params = self.process_parameter_list(token, c);
        c = self.reader.next_nonwhite();

        // Search for inheritance information.
        if self.reader.read_word(c, token) && token.name == "extends" {
            c = self.reader.next_nonwhite();
            self.reader.read_word(c, token);
            class_token.inheritance = token.name.clone();
            debug!("class {} extends {}", class_token.name, class_token.inheritance);
        }

        self.create_tag(&mut class_token, Kind::Class);

        // The parameter list tags land inside the class scope.
        for mut param in params {
            self.create_tag(&mut param, Kind::Constant);
        }
    }

    /// Compiler directives are line-based: `define FOO ... yields a
    /// constant tag for FOO and the rest of the line is skipped.
    fn process_define(&mut self, token: &mut Token) {
        let c = self.reader.next_nonwhite();
        self.reader.read_word(c, token);
        self.create_tag(token, Kind::Constant);
        self.reader.skip_to_newline();
    }

    /// A concurrent assertion takes the name of the label most recently
    /// seen in the enclosing scope.
    fn process_assertion(&mut self, token: &mut Token) {
        if !self.ctx().block_name.is_empty() {
            token.name = self.ctx().block_name.clone();
            self.create_tag(token, Kind::Assertion);
            let c = self.reader.skip_to_semicolon();
            self.reader.unget(c);
        }
    }

    /// covergroup, interface, modport, module, package, program, property
    fn process_design_element(&mut self, token: &mut Token) {
        let kind = token.kind;
        let mut c = self.reader.next_nonwhite();
        if !self.reader.read_word(c, token) {
            return;
        }
        // Qualifiers like virtual or automatic come before the name.
        while lookup_keyword(&token.name, self.lang) == Kind::Ignore {
            c = self.reader.next_nonwhite();
            if c.is_none() {
                return;
            }
            self.reader.read_word(c, token);
        }
        self.create_tag(token, kind);

        c = self.reader.next_nonwhite();
        if c == Some('#') {
            let params = self.process_parameter_list(token, c);
            for mut param in params {
                self.create_tag(&mut param, Kind::Constant);
            }
            // Any parameter declarations that follow inside the element are
            // not overridable anymore.
            self.ctx_mut().has_param_list = true;
            c = self.reader.next_nonwhite();
        }

        if c == Some('(') {
            if kind == Kind::Modport {
                // The modport's port list is not walked for port tags.
                self.reader.skip_past_match('(', ')');
            } else if kind.has_simple_port_list() {
                self.process_port_list(token, c);
            }
        } else {
            self.reader.unget(c);
        }
    }

    /// Steps over a macro reference or compiler directive found mid-
    /// declaration.  `define is recognized and tagged on the way.
    fn skip_macro(&mut self, c: Option<char>) -> Option<char> {
        let mut c = c;
        if c == Some('`') {
            // A separate token; the caller's word is not disturbed.
            let mut token = Token::new();
            self.reader.read_word(c, &mut token);
            token.update_kind(self.lang);
            match token.kind {
                Kind::Directive => {
                    self.reader.skip_to_newline();
                    c = self.reader.next_nonwhite();
                }
                Kind::Define => {
                    self.process_define(&mut token);
                    c = self.reader.next_nonwhite();
                }
                _ => {
                    // A macro, possibly a macro function.
                    c = self.reader.next_nonwhite();
                    if c == Some('(') {
                        let n = self.reader.skip_past_match('(', ')');
                        c = self.reader.skip_white(n);
                    }
                }
            }
        }
        c
    }

    /// The generic name-list recognizer:
    /// `<qualifier>* <type>? name [dim]? (= expr)? (, name ...)* ;`
    /// used for nets, registers, ports, parameters, events, constants, and
    /// the names following an enum or struct body.
    fn tag_name_list(&mut self, token: &mut Token, c: Option<char>) {
        let mut kind = token.kind;
        let mut actual_kind = Kind::Undefined;
        let mut c = c;

        // Declarations commonly carry strengths, widths, and delays before
        // the first name:  reg [3:0] net_name;  wire (strong0, weak1) w;
        if c == Some('(') {
            c = self.reader.skip_past_match('(', ')');
        }
        let w = self.reader.skip_white(c);
        c = self.reader.skip_dimension(w);
        c = self.reader.skip_delay(c);

        loop {
            let mut repeat = false;

            while c == Some('`') {
                c = self.skip_macro(c);
            }

            if self.reader.read_word(c, token) {
                token.update_kind(self.lang);
                if kind == Kind::Identifier {
                    // The declaring word was a user-defined type.
                    if token.kind == Kind::Net {
                        actual_kind = Kind::Net;
                        repeat = true;
                    } else if token.kind == Kind::Register {
                        actual_kind = Kind::Register;
                        repeat = true;
                    } else {
                        kind = Kind::Register;
                    }
                } else if token.kind != Kind::Identifier || kind == Kind::Port {
                    // Keywords in front of the name, or a port redeclared
                    // in the body.
                    repeat = true;
                }
            }
            let n = self.reader.next_nonwhite();
            c = self.reader.skip_dimension(n);

            if matches!(c, Some(',' | ';' | ')')) {
                let k = if kind == Kind::Undefined { actual_kind } else { kind };
                self.create_tag(token, k);
                repeat = false;
            } else if c == Some('=') {
                if !repeat {
                    // But a procedural assignment (foo = bar;) names no new
                    // entity.
                    let k = if kind == Kind::Undefined { actual_kind } else { kind };
                    self.create_tag(token, k);
                }
                let n = self.reader.next_nonwhite();
                c = self.reader.skip_expression(n);
            }
            if c == Some(',') {
                c = self.reader.next_nonwhite();
                repeat = true;
            }
            if !repeat {
                break;
            }
        }
        // A name followed by ( is a module instance; the connection list is
        // skipped whole and names no tag.
        if c == Some('(') {
            c = self.reader.skip_past_match('(', ')');
        }
        self.reader.unget(c);
    }

    fn find_tag(&mut self, token: &mut Token) {
        trace!("checking token {} of kind {:?}", token.name, token.kind);

        if self.ctx().kind != Kind::Undefined
            && matches!(token.kind, Kind::End | Kind::EndDesignElem)
        {
            // Drop the context, but only on a matching end token.
            self.drop_end_context(token);
        }

        match token.kind {
            Kind::Constant
            | Kind::Event
            | Kind::LocalParam
            | Kind::Net
            | Kind::Parameter
            | Kind::Port
            | Kind::Register => {
                let c = self.reader.next_nonwhite();
                self.tag_name_list(token, c);
            }
            Kind::Identifier => {
                let c = self.reader.next_nonwhite();
                if c == Some(':') {
                    // A label; the outer loop captures it.
                    self.reader.unget(c);
                } else if c == Some('=') {
                    let n = self.reader.next_nonwhite();
                    self.reader.skip_expression(n);
                } else {
                    // A declaration with a user-defined type.
                    self.tag_name_list(token, c);
                }
            }
            Kind::Class => self.process_class(token),
            Kind::Typedef => self.process_typedef(token),
            Kind::Enum => self.process_enum(token),
            Kind::Struct => self.process_struct(token),
            Kind::Prototype => self.ctx_mut().prototype = true,
            Kind::Covergroup
            | Kind::Interface
            | Kind::Modport
            | Kind::Module
            | Kind::Package
            | Kind::Program
            | Kind::Property => self.process_design_element(token),
            Kind::Begin => self.process_begin(token),
            Kind::End => self.process_end(token),
            Kind::Function | Kind::Task => self.process_function(token),
            Kind::Assertion => self.process_assertion(token),
            Kind::Define => self.process_define(token),
            Kind::Directive => self.reader.skip_to_newline(),
            Kind::EndDesignElem | Kind::Ignore => (),
            _ => trace!("unexpected token kind {:?}", token.kind),
        }
    }

    fn scan(&mut self) {
        let mut token = Token::new();
        loop {
            let c = self.reader.next_nonwhite();
            match c {
                None => break,
                // The current word becomes the block name whenever a `:`
                // is seen; labeled assertions pick it up later.
                Some(':') => {
                    let name = token.name.clone();
                    self.ctx_mut().block_name = name;
                }
                Some(';') => {
                    // Prototypes have no end statement; they end here.
                    if self.stack.len() >= 2 && self.stack[self.stack.len() - 2].prototype {
                        self.drop_context();
                    }
                    self.ctx_mut().prototype = false;
                    self.tag_contents.clear();
                }
                Some('#') => {
                    self.reader.skip_delay(c);
                }
                _ => {
                    if self.reader.read_word(c, &mut token) {
                        token.update_kind(self.lang);
                        if token.kind != Kind::Undefined {
                            self.find_tag(&mut token);
                        }
                    }
                }
            }
        }
        // End of input prunes whatever is still on the stack.
        trace!("end of input with {} open scopes", self.stack.len() - 1);
    }
}
