/// Selects the recognized language.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Lang {
    /// IEEE 1364.
    Verilog,
    /// IEEE 1800.
    SystemVerilog,
}

impl Lang {
    /// Selects the language for a file name extension, the way the host
    /// tool maps input files onto parsers.
    pub fn from_extension(ext: &str) -> Option<Lang> {
        match ext {
            "v" => Some(Lang::Verilog),
            "sv" | "svh" | "svi" => Some(Lang::SystemVerilog),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Lang::Verilog => "Verilog",
            Lang::SystemVerilog => "SystemVerilog",
        }
    }
}
