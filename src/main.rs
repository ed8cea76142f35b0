extern crate argparse;
extern crate html2outline;
use argparse::{ArgumentParser, Store, StoreOption, StoreTrue};
use html2outline::config::{self, Config};
use html2outline::{Decorator, Error};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::process;

struct Args {
    infile: Option<String>,
    outfile: Option<String>,
    indent_size: usize,
    indent_doubling: bool,
    hide_data: bool,
    only_comments: bool,
    skip_head: bool,
    hide_text: bool,
    skip_empty_tags: bool,
    no_colour: bool,
}

fn apply<D: Decorator>(conf: Config<D>, args: &Args) -> Config<D> {
    conf.indent_size(args.indent_size)
        .indent_doubling(args.indent_doubling)
        .hide_data_attributes(args.hide_data)
        .only_comments(args.only_comments)
        .skip_head(args.skip_head)
        .hide_text(args.hide_text)
        .skip_empty_tags(args.skip_empty_tags)
        .no_colour(args.no_colour)
}

fn open_input(infile: &Option<String>) -> Result<Box<dyn Read>, Error> {
    match infile.as_deref() {
        None | Some("-") => Ok(Box::new(io::stdin())),
        Some(name) => match File::open(name) {
            Ok(file) => Ok(Box::new(file)),
            Err(source) => Err(Error::Input {
                path: name.into(),
                source,
            }),
        },
    }
}

fn open_output(outfile: &Option<String>) -> Result<Box<dyn Write>, Error> {
    match outfile {
        None => Ok(Box::new(io::stdout().lock())),
        Some(name) => match File::create(name) {
            Ok(file) => Ok(Box::new(file)),
            Err(source) => Err(Error::Output {
                path: name.clone(),
                source,
            }),
        },
    }
}

fn error_message(err: &Error) -> String {
    format!("html2outline: {}", err)
}

fn run(args: &Args) -> Result<(), Error> {
    let input = open_input(&args.infile)?;
    let mut output = BufWriter::new(open_output(&args.outfile)?);
    #[cfg(unix)]
    let conf = config::ansi();
    #[cfg(not(unix))]
    let conf = config::plain();
    apply(conf, args).write_from_read(input, &mut output)?;
    output.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = Args {
        infile: None,
        outfile: None,
        indent_size: 4,
        indent_doubling: false,
        hide_data: false,
        only_comments: false,
        skip_head: false,
        hide_text: false,
        skip_empty_tags: false,
        no_colour: false,
    };

    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Show the element structure of an HTML document as an outline.");
        ap.refer(&mut args.infile).add_argument(
            "infile",
            StoreOption,
            "Input HTML file (default or '-' is standard input)",
        );
        ap.refer(&mut args.outfile).add_option(
            &["-o", "--output"],
            StoreOption,
            "Output file (default is standard output)",
        );
        ap.refer(&mut args.indent_size).add_option(
            &["--indent-size"],
            Store,
            "Indentation size per level (default is 4)",
        );
        ap.refer(&mut args.indent_doubling).add_option(
            &["--indent-doubling"],
            StoreTrue,
            "Scale indentation from half the level",
        );
        ap.refer(&mut args.hide_data).add_option(
            &["--hide-data"],
            StoreTrue,
            "Hide data-* attributes",
        );
        ap.refer(&mut args.only_comments).add_option(
            &["--only-comments"],
            StoreTrue,
            "Only show comments",
        );
        ap.refer(&mut args.skip_head)
            .add_option(&["--skip-head"], StoreTrue, "Skip the <head> element");
        ap.refer(&mut args.hide_text)
            .add_option(&["--hide-text"], StoreTrue, "Hide text snippets");
        ap.refer(&mut args.skip_empty_tags).add_option(
            &["--skip-empty-tags"],
            StoreTrue,
            "Skip elements with no text of their own",
        );
        ap.refer(&mut args.no_colour).add_option(
            &["--no-colour", "--no-color"],
            StoreTrue,
            "Don't use terminal colours",
        );
        ap.parse_args_or_exit();
    }

    if let Err(err) = run(&args) {
        eprintln!("{}", error_message(&err));
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{error_message, open_input, open_output};
    use html2outline::Error;

    #[test]
    fn test_missing_input_file() {
        let path = "/nonexistent/html2outline/page.html";
        match open_input(&Some(path.into())) {
            Err(err @ Error::Input { .. }) => {
                if let Error::Input { path: p, .. } = &err {
                    assert_eq!(p, path);
                }
                let msg = error_message(&err);
                assert!(msg.starts_with(&format!("html2outline: {}: ", path)), "{}", msg);
            }
            Err(other) => panic!("unexpected error {:?}", other),
            Ok(_) => panic!("opened a missing file"),
        }
    }

    #[test]
    fn test_stdin_input() {
        assert!(open_input(&None).is_ok());
        assert!(open_input(&Some("-".into())).is_ok());
    }

    #[test]
    fn test_uncreatable_output_file() {
        let path = "/nonexistent/html2outline/out.txt";
        match open_output(&Some(path.into())) {
            Err(Error::Output { path: p, .. }) => assert_eq!(p, path),
            Err(other) => panic!("unexpected error {:?}", other),
            Ok(_) => panic!("created a file in a missing directory"),
        }
    }
}
