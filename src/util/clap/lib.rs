//! `arg!`, a one-line notation for the `clap::Arg`s of the crysym tools.
//!
//! Three shapes are understood:
//!
//! ```ignore
//! arg!( input=STRUCTURE "help")                // required positional
//! arg!( config [-c][--config]=CONFIG "help")   // option taking one value
//! arg!( verbose [-v][--verbose]... "help")     // flag counted by occurrences
//! ```
//!
//! An option or flag needs at least one `[-x]` or `[--long-name]` switch.

pub extern crate clap;

#[macro_export]
macro_rules! arg {
    ($name:ident = $meta:ident $help:expr) => {
        $crate::clap::Arg::with_name(stringify!($name))
            .required(true)
            .takes_value(true)
            .value_name(stringify!($meta))
            .help($help)
    };

    // a repeated option would swallow the following positional without number_of_values(1)
    ($name:ident $([$($switch:tt)+])+ = $meta:ident $help:expr) => {
        $crate::__arg_switches!{
            $crate::clap::Arg::with_name(stringify!($name))
                .takes_value(true)
                .number_of_values(1)
                .value_name(stringify!($meta))
                .help($help);
            $([$($switch)+])+
        }
    };

    ($name:ident $([$($switch:tt)+])+ ... $help:expr) => {
        $crate::__arg_switches!{
            $crate::clap::Arg::with_name(stringify!($name))
                .multiple(true)
                .help($help);
            $([$($switch)+])+
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __arg_switches {
    ($arg:expr;) => { $arg };

    // `--long-name` arrives as the tokens `- - long - name`
    ($arg:expr; [- - $($long:tt)+] $($rest:tt)*) => {
        $crate::__arg_switches!{ $arg.long(concat!($(stringify!($long)),+)); $($rest)* }
    };

    ($arg:expr; [- $short:ident] $($rest:tt)*) => {
        $crate::__arg_switches!{ $arg.short(stringify!($short)); $($rest)* }
    };
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use clap::App;

    fn app() -> App<'static, 'static> {
        App::new("crysym")
            .arg(arg!( verbose [-v][--verbose]... "log more"))
            .arg(arg!( log [--log]=FILE "log file"))
            .arg(arg!( config [-c][--config]=CONFIG "settings"))
            .arg(arg!( symmetry_precision [--symmetry-precision]=TOL "tolerance"))
            .arg(arg!( input=STRUCTURE "structure"))
    }

    #[test]
    fn options_and_positionals() {
        let m = app().get_matches_from_safe(vec![
            "crysym", "nacl.yaml", "--log", "out.log", "-c", "loose.yaml",
        ]).unwrap();
        assert_eq!(m.value_of("input"), Some("nacl.yaml"));
        assert_eq!(m.value_of("log"), Some("out.log"));
        assert_eq!(m.value_of("config"), Some("loose.yaml"));
        assert_eq!(m.occurrences_of("verbose"), 0);
    }

    #[test]
    fn hyphenated_long_names() {
        let m = app().get_matches_from_safe(vec![
            "crysym", "--symmetry-precision", "0.01", "nacl.yaml",
        ]).unwrap();
        assert_eq!(m.value_of("symmetry_precision"), Some("0.01"));
    }

    #[test]
    fn counted_flags() {
        let m = app().get_matches_from_safe(vec!["crysym", "-vv", "--verbose", "nacl.yaml"]).unwrap();
        assert_eq!(m.occurrences_of("verbose"), 3);
    }

    #[test]
    fn positional_is_required() {
        assert!(app().get_matches_from_safe(vec!["crysym"]).is_err());
        assert!(app().get_matches_from_safe(vec!["crysym", "--log"]).is_err());
    }
}
