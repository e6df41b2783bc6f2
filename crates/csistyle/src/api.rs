/// The control sequence introducer `ESC [` that starts every sequence emitted
/// by this crate.
pub const CSI: &str = "\x1b[";

/// A command for the terminal.
///
/// Commands provide instructions to the terminal and are communicated in-band
/// by writing ANSI escape codes. Doing so is the responsibility of the
/// [`core::fmt::Display`] implementation, whereas the [`core::fmt::Debug`]
/// implementation should simply identify the command. Since displaying a
/// command is a pure computation, `command.to_string()` yields its escape
/// sequence without touching any stream.
///
/// This trait is object-safe.
pub trait Command: core::fmt::Debug + core::fmt::Display {}

/// A borrowed command is a command.
impl<C: Command + ?Sized> Command for &C {}

/// A boxed command is a command.
impl<C: Command + ?Sized> Command for Box<C> {}

/// Combine several commands into a single new command.
///
/// The new command preserves the order of its component commands. Upon display,
/// it emits as many ANSI escape sequence as it has component commands. Upon
/// debug, it reveals the macro's source arguments.
///
/// The component commands must be constant expressions, such as unit structs,
/// enum variants, or static commands with const generics. For commands computed
/// at runtime, simply format them one after the other.
///
/// When fusing only SGR commands, prefer [`fuse_sgr!`](crate::fuse_sgr), which
/// generates commands that emit a single ANSI escape sequence only.
///
/// # Example
///
/// ```
/// # use csistyle::{cmd::{MoveDown, MoveRight}, fuse};
/// let move_down_right_twice = fuse!(MoveDown::<2>, MoveRight::<2>);
/// assert_eq!(format!("{}", move_down_right_twice), "\x1b[2B\x1b[2C");
/// ```
#[macro_export]
macro_rules! fuse {
    ($($command:expr),+ $(,)?) => {{
        /// One or more combined commands.
        #[derive(Copy, Clone, PartialEq, Eq)]
        struct Fused;

        impl $crate::Command for Fused {}

        impl ::core::fmt::Debug for Fused {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                f.write_str(concat!(stringify!(fuse!), "(", stringify!($($command),+), ")"))
            }
        }

        impl ::core::fmt::Display for Fused {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                $(::core::fmt::Display::fmt(&$command, f)?;)*
                Ok(())
            }
        }

        Fused
    }}
}

// ------------------------------------------------------------------------------------------------

/// A command using select-graphic-rendition ANSI escape sequences.
///
/// To facilitate composition, SGR commands implement [`Sgr::write_param`],
/// which writes the parameter(s) without the leading `CSI` and the trailing
/// `m`.
///
/// Declaring `out` to be a formatter instead of a generic writer keeps the
/// trait object-safe.
pub trait Sgr: Command {
    /// Write the parameter(s) for this SGR command.
    fn write_param(&self, out: &mut core::fmt::Formatter<'_>) -> core::fmt::Result;
}

/// A borrowed SGR is an SGR.
impl<S: Sgr + ?Sized> Sgr for &S {
    fn write_param(&self, out: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        (**self).write_param(out)
    }
}

/// A boxed SGR is an SGR.
impl<S: Sgr + ?Sized> Sgr for Box<S> {
    fn write_param(&self, out: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        (**self).write_param(out)
    }
}

/// A wrapper that displays only the parameters of an SGR command.
///
/// ```
/// # use csistyle::{cmd::DynSetForeground8, Params};
/// assert_eq!(format!("{}", Params(&DynSetForeground8(196))), "38;5;196");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Params<'a, S: ?Sized>(pub &'a S);

impl<S: Sgr + ?Sized> core::fmt::Display for Params<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.write_param(f)
    }
}

/// Combine several SGR commands into a single new SGR command.
///
/// The new SGR command preserves the order of its component commands. Upon
/// display, it emits only one ANSI escape sequence. Upon debug, it reveals the
/// macro's source arguments.
///
/// To fuse commands other than SGR commands, use [`fuse!`].
#[macro_export]
macro_rules! fuse_sgr {
    ( $sgr:expr, $( $sgr2:expr ),* $(,)? ) => {{
        /// One or more SGR commands fused into one.
        #[derive(Copy, Clone, PartialEq, Eq)]
        struct FusedSgr;

        impl ::core::fmt::Debug for FusedSgr {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                f.write_str(concat!(stringify!(fuse_sgr!), "(", stringify!($sgr, $($sgr2),*), ")"))
            }
        }

        impl ::core::fmt::Display for FusedSgr {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::CSI)?;
                $crate::Sgr::write_param(self, f)?;
                f.write_str("m")
            }
        }

        impl $crate::Command for FusedSgr {}
        impl $crate::Sgr for FusedSgr {
            fn write_param(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::Sgr::write_param(&$sgr, f)?;
                $(
                    f.write_str(";")?;
                    $crate::Sgr::write_param(&$sgr2, f)?;
                )*
                Ok(())
            }
        }

        FusedSgr
    }};
}

fn _assert_traits_are_object_safe() {
    fn is_object_safe<T: ?Sized>() {}

    is_object_safe::<dyn Command>();
    is_object_safe::<dyn Sgr>();
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cmd::{Effect, MoveTo, ResetStyle, SetBackground8, SetForeground8};

    #[test]
    fn test_fuse() {
        let s = format!("{}", fuse!(Effect::Bold, MoveTo::<3, 4>, ResetStyle));
        assert_eq!(s, "\x1b[1m\x1b[3;4H\x1b[0m");

        let cmd = fuse!(Effect::SlowBlink, SetBackground8::<219>);
        assert_eq!(format!("{}", cmd), "\x1b[5m\x1b[48;5;219m");
        assert_eq!(
            format!("{:?}", cmd),
            "fuse!(Effect::SlowBlink, SetBackground8::<219>)"
        );

        let copy = cmd;
        assert_eq!(format!("{}{}", cmd, copy), format!("{}{}", cmd, cmd));
        assert_eq!(cmd, copy);
    }

    #[test]
    fn test_fuse_sgr() {
        let cmd = fuse_sgr!(Effect::Bold, SetForeground8::<0>, SetBackground8::<15>);
        assert_eq!(format!("{}", cmd), "\x1b[1;38;5;0;48;5;15m");
        assert_eq!(format!("{}", Params(&cmd)), "1;38;5;0;48;5;15");
        assert_eq!(
            format!("{:?}", cmd),
            "fuse_sgr!(Effect::Bold, SetForeground8::<0>, SetBackground8::<15>)"
        );
    }

    #[test]
    fn test_dyn_sgr() {
        let boxed: Box<dyn Sgr> = Box::new(Effect::Underline);
        assert_eq!(format!("{}", boxed), "\x1b[4m");
        assert_eq!(format!("{}", Params(&boxed)), "4");
    }
}
