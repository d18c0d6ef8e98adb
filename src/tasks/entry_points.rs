use crate::FailResult;
use crate::cmd;
use crate::filetypes::structure::LabeledStructure;
use crate::ui::logging::GlobalLogger;
use crate::ui::cli_deserialize::CliDeserialize;

use crysym_tasks_config::{Settings, ValidatedSettings, YamlRead};

use path_abs::{FileRead, PathFile};
use std::ffi::OsStr;
use std::path::PathBuf;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        } else {
            error!("\
                (If you found the above error message to be particularly lacking in \
                detail, try again with RUST_BACKTRACE=1)\
            ");
        }
        std::process::exit(1);
    });
}

trait ArgMatchesExt {
    // For when the value ought to exist because it was 'required(true)'
    // (and therefore clap would have exited if it were missing)
    fn expect_value_of(&self, s: &str) -> String;
}

impl<'a> ArgMatchesExt for clap::ArgMatches<'a> {
    fn expect_value_of(&self, s: &str) -> String
    { self.value_of(s).unwrap_or_else(|| panic!("BUG! ({} was required)", s)).into() }
}

/// Options shared by every subcommand.
struct GlobalArgs {
    verbosity: i32,
    log: Option<PathBuf>,
    config: Option<PathFile>,
}

impl CliDeserialize for GlobalArgs {
    fn _augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
        app.args(&[
            arg!( verbose [-v][--verbose]... "log more details (may be given twice)"),
            arg!( log [--log]=FILE "also write the log to this file"),
            arg!( config [-c][--config]=CONFIG "\
                settings yaml. Recognized keys are 'symmetry-precision' \
                (default 1e-5) and 'max-iterations' (default 10000).\
            "),
        ])
    }

    fn _resolve_args(m: &clap::ArgMatches<'_>) -> FailResult<Self>
    { Ok(GlobalArgs {
        verbosity: m.occurrences_of("verbose") as i32,
        log: m.value_of("log").map(PathBuf::from),
        config: match m.value_of("config") {
            Some(path) => Some(PathFile::new(path)?),
            None => None,
        },
    })}
}

impl GlobalArgs {
    fn read_settings(&self) -> FailResult<ValidatedSettings>
    {
        let settings = match &self.config {
            Some(path) => Settings::from_reader(FileRead::open(path)?)?,
            None => Settings::default(),
        };
        settings.validate()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Subcommand { SpaceGroup, Primitive, Niggli, Reduce }

impl Subcommand {
    const ALL: &'static [Subcommand] = &[
        Subcommand::SpaceGroup,
        Subcommand::Primitive,
        Subcommand::Niggli,
        Subcommand::Reduce,
    ];

    fn name(self) -> &'static str
    {
        match self {
            Subcommand::SpaceGroup => "spacegroup",
            Subcommand::Primitive => "primitive",
            Subcommand::Niggli => "niggli",
            Subcommand::Reduce => "reduce",
        }
    }

    fn about(self) -> &'static str
    {
        match self {
            Subcommand::SpaceGroup => "determine the space group and write the structure in its standard setting",
            Subcommand::Primitive => "write the primitive cell of the standard setting",
            Subcommand::Niggli => "write the Niggli-reduced primitive cell",
            Subcommand::Reduce => "write the Niggli and Delaunay reduced lattices (atoms are ignored)",
        }
    }

    fn from_name(name: &str) -> Option<Subcommand>
    { Subcommand::ALL.iter().cloned().find(|cmd| cmd.name() == name) }

    fn app<'a, 'b>(self) -> clap::App<'a, 'b>
    {
        clap::SubCommand::with_name(self.name())
            .about(self.about())
            .args(&[
                arg!( input=STRUCTURE "structure document (.json, or yaml otherwise)"),
            ])
    }

    fn run(self, structure: &LabeledStructure, settings: &Settings) -> FailResult<serde_json::Value>
    {Ok({
        match self {
            Subcommand::SpaceGroup => serde_json::to_value(cmd::space_group_report(structure, settings)?)?,
            Subcommand::Primitive => serde_json::to_value(cmd::primitive_report(structure, settings)?)?,
            Subcommand::Niggli => serde_json::to_value(cmd::niggli_report(structure, settings)?)?,
            Subcommand::Reduce => serde_json::to_value(cmd::reduce_report(structure, settings)?)?,
        }
    })}
}

// %% CRATES: binary: crysym %%
#[allow(dangerous_implicit_autorefs)] // triggered inside clap 2's `crate_authors!` expansion
pub fn crysym() {
    wrap_result_main(|| {
        let (app, de) = CliDeserialize::augment_clap_app({
            app_from_crate!(", ")
                .setting(clap::AppSettings::SubcommandRequiredElseHelp)
                .subcommands(Subcommand::ALL.iter().map(|cmd| cmd.app()))
        });
        let matches = app.get_matches();
        let args: GlobalArgs = de.resolve_args(&matches)?;

        let mut logger = GlobalLogger::default();
        logger.verbosity(args.verbosity);
        if let Some(path) = &args.log {
            logger.path(path);
        }
        logger.apply()?;

        let settings = args.read_settings()?;

        let (command, sub_matches) = match matches.subcommand() {
            (name, Some(sub_matches)) => match Subcommand::from_name(name) {
                Some(command) => (command, sub_matches),
                None => panic!("BUG! unknown subcommand {:?}", name),
            },
            (_, None) => panic!("BUG! a subcommand was required"),
        };

        let input = PathFile::new(sub_matches.expect_value_of("input"))?;
        let structure = LabeledStructure::load(&input)?;

        let report = command.run(&structure, &settings)?;
        let stdout = std::io::stdout();
        serde_json::to_writer_pretty(stdout.lock(), &report)?;
        println!();
        Ok(())
    });
}
