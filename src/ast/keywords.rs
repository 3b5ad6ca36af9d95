//! Keyword enums: unit-variant families encoded by tag alone.

use std::fmt;

use serde::Serialize;

/// A unit-variant family decoded from a bare tag.
pub trait Keyword: Sized {
    /// Family name used in diagnostics.
    const FAMILY: &'static str;

    /// Maps a wire tag to its variant, or `None` when the tag is unknown.
    fn from_tag(tag: &str) -> Option<Self>;

    /// The FPP source text of the keyword.
    fn as_str(&self) -> &'static str;
}

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $tag:literal, $text:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $($variant,)+
        }

        impl Keyword for $name {
            const FAMILY: &'static str = stringify!($name);

            fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some($name::$variant),)+
                    _ => None,
                }
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum! {
    /// Binary operation
    Binop {
        Add => "Add", "+";
        Div => "Div", "/";
        Mul => "Mul", "*";
        Sub => "Sub", "-";
    }
}

keyword_enum! {
    /// Unary operation
    Unop {
        Minus => "Minus", "-";
    }
}

keyword_enum! {
    ComponentKind {
        Active => "Active", "active";
        Passive => "Passive", "passive";
        Queued => "Queued", "queued";
    }
}

keyword_enum! {
    Visibility {
        Private => "Private", "private";
        Public => "Public", "public";
    }
}

keyword_enum! {
    /// Behavior when an async input queue is full
    QueueFull {
        Assert => "Assert", "assert";
        Block => "Block", "block";
        Drop => "Drop", "drop";
        Hook => "Hook", "hook";
    }
}

keyword_enum! {
    SpecCommandKind {
        Async => "Async", "async";
        Guarded => "Guarded", "guarded";
        Sync => "Sync", "sync";
    }
}

keyword_enum! {
    /// Kind of a connection pattern
    PatternKind {
        Command => "Command", "command";
        Event => "Event", "event";
        Health => "Health", "health";
        Param => "Param", "param";
        Telemetry => "Telemetry", "telemetry";
        TextEvent => "TextEvent", "text event";
        Time => "Time", "time";
    }
}

keyword_enum! {
    SpecEventSeverity {
        ActivityHigh => "ActivityHigh", "activity high";
        ActivityLow => "ActivityLow", "activity low";
        Command => "Command", "command";
        Diagnostic => "Diagnostic", "diagnostic";
        Fatal => "Fatal", "fatal";
        WarningHigh => "WarningHigh", "warning high";
        WarningLow => "WarningLow", "warning low";
    }
}

keyword_enum! {
    GeneralKind {
        AsyncInput => "AsyncInput", "async input";
        GuardedInput => "GuardedInput", "guarded input";
        Output => "Output", "output";
        SyncInput => "SyncInput", "sync input";
    }
}

keyword_enum! {
    SpecialInputKind {
        Async => "Async", "async";
        Guarded => "Guarded", "guarded";
        Sync => "Sync", "sync";
    }
}

keyword_enum! {
    /// Kind of a special port instance
    SpecialKind {
        CommandRecv => "CommandRecv", "command recv";
        CommandReg => "CommandReg", "command reg";
        CommandResp => "CommandResp", "command resp";
        Event => "Event", "event";
        ParamGet => "ParamGet", "param get";
        ParamSet => "ParamSet", "param set";
        ProductGet => "ProductGet", "product get";
        ProductRecv => "ProductRecv", "product recv";
        ProductRequest => "ProductRequest", "product request";
        ProductSend => "ProductSend", "product send";
        Telemetry => "Telemetry", "telemetry";
        TextEvent => "TextEvent", "text event";
        TimeGet => "TimeGet", "time get";
    }
}

keyword_enum! {
    SpecTlmChannelUpdate {
        Always => "Always", "always";
        OnChange => "OnChange", "on change";
    }
}

keyword_enum! {
    LimitKind {
        Red => "Red", "red";
        Orange => "Orange", "orange";
        Yellow => "Yellow", "yellow";
    }
}

keyword_enum! {
    TypeFloat {
        F32 => "F32", "F32";
        F64 => "F64", "F64";
    }
}

keyword_enum! {
    TypeInt {
        I8 => "I8", "I8";
        I16 => "I16", "I16";
        I32 => "I32", "I32";
        I64 => "I64", "I64";
        U8 => "U8", "U8";
        U16 => "U16", "U16";
        U32 => "U32", "U32";
        U64 => "U64", "U64";
    }
}

keyword_enum! {
    FormalParamKind {
        Ref => "Ref", "ref";
        Value => "Value", "value";
    }
}

keyword_enum! {
    LiteralBool {
        True => "True", "true";
        False => "False", "false";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_map_to_variants() {
        assert_eq!(ComponentKind::from_tag("Queued"), Some(ComponentKind::Queued));
        assert_eq!(SpecialKind::from_tag("ProductRequest"), Some(SpecialKind::ProductRequest));
        assert_eq!(TypeInt::from_tag("U16"), Some(TypeInt::U16));
        assert_eq!(Binop::from_tag("Mod"), None);
        assert_eq!(QueueFull::from_tag("drop"), None);
    }

    #[test]
    fn display_uses_source_keywords() {
        assert_eq!(SpecEventSeverity::WarningHigh.to_string(), "warning high");
        assert_eq!(PatternKind::TextEvent.to_string(), "text event");
        assert_eq!(GeneralKind::GuardedInput.to_string(), "guarded input");
        assert_eq!(Binop::Div.to_string(), "/");
        assert_eq!(TypeFloat::F64.to_string(), "F64");
    }

    #[test]
    fn family_names() {
        assert_eq!(Visibility::FAMILY, "Visibility");
        assert_eq!(SpecTlmChannelUpdate::FAMILY, "SpecTlmChannelUpdate");
    }
}
