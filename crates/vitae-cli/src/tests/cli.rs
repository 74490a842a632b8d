use crate::Cli;
use crate::commands::Commands;
use crate::report_commands::ReportCommands;

use clap::Parser;
use googletest::prelude::*;

#[test]
fn given_register_args_when_parsed_then_fields_mapped() {
    let cli = Cli::try_parse_from([
        "vitae",
        "register",
        "--email",
        "ana@example.com",
        "--password",
        "s3cret",
        "--name",
        "Ana",
    ])
    .unwrap();

    let Commands::Register {
        email,
        password,
        name,
        phone,
    } = cli.command
    else {
        panic!("expected register");
    };
    assert_that!(email, eq("ana@example.com"));
    assert_that!(password, eq("s3cret"));
    assert_that!(name, eq("Ana"));
    assert_that!(phone, none());
    assert_that!(cli.pretty, eq(false));
}

#[test]
fn given_pretty_after_subcommand_when_parsed_then_global_flag_set() {
    let cli = Cli::try_parse_from(["vitae", "whoami", "--pretty"]).unwrap();

    assert_that!(cli.pretty, eq(true));
    assert_that!(matches!(cli.command, Commands::Whoami), eq(true));
}

#[test]
fn given_login_without_password_when_parsed_then_error() {
    let result = Cli::try_parse_from(["vitae", "login", "--email", "ana@example.com"]);

    assert_that!(result.is_err(), eq(true));
}

#[test]
fn given_report_submit_args_when_parsed_then_optional_fields_mapped() {
    let cli = Cli::try_parse_from([
        "vitae",
        "report",
        "submit",
        "--kind",
        "harassment",
        "--description",
        "Followed home",
        "--date",
        "2024-03-08",
        "--identified",
        "--contact-phone",
        "555-0100",
    ])
    .unwrap();

    let Commands::Report {
        action:
            ReportCommands::Submit {
                kind,
                date,
                identified,
                contact_name,
                contact_phone,
                ..
            },
    } = cli.command
    else {
        panic!("expected report submit");
    };
    assert_that!(kind, eq("harassment"));
    assert_that!(date, some(eq("2024-03-08")));
    assert_that!(identified, eq(true));
    assert_that!(contact_name, none());
    assert_that!(contact_phone, some(eq("555-0100")));
}

#[test]
fn given_contact_without_identified_when_parsed_then_error() {
    let result = Cli::try_parse_from([
        "vitae",
        "report",
        "submit",
        "--kind",
        "other",
        "--description",
        "x",
        "--contact-name",
        "Ana",
    ]);

    assert_that!(result.is_err(), eq(true));
}
