use clap::Parser;
use frules_rs::expression::{Expression, Shape};
use frules_rs::hedge::Hedge;
use frules_rs::inputs::Inputs;
use frules_rs::norm::Norms;
use frules_rs::rule::Rule;
use frules_rs::shape::{ltrapezoid, rtrapezoid, trapezoid};

#[derive(Parser, Debug)]
#[command(author, version, about = "Evaluate a few fuzzy rules about a person")]
struct Cli {
    /// Height in centimeters.
    #[arg(long, default_value_t = 180.0)]
    height: f64,

    /// Age in years.
    #[arg(long, default_value_t = 70.0)]
    age: f64,

    /// Weight in kilograms. Rules needing it fail when omitted.
    #[arg(long)]
    weight: Option<f64>,

    /// Norm pair: max-min, product-sum, hamacher, einstein, lukasiewicz.
    #[arg(long, default_value_t = Norms::default())]
    norms: Norms,

    /// Evaluate under every norm pair.
    #[arg(long)]
    all_norms: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let tall = Shape::named(rtrapezoid(170.0, 190.0), "tall");
    let short = Expression::named(ltrapezoid(150.0, 170.0), "short");
    let old = Expression::named(rtrapezoid(60.0, 80.0), "old");
    let young = Expression::named(ltrapezoid(20.0, 40.0), "young");
    let heavy = Expression::named(trapezoid(80.0, 100.0, 150.0, 200.0), "heavy");

    let rules = vec![
        (
            "tall and old",
            Rule::from_bindings([("height", tall.clone().into()), ("age", old.clone())])?,
        ),
        (
            "very tall or young",
            Rule::binding("height", tall.hedged(Hedge::Very).into()) | Rule::binding("age", young),
        ),
        (
            "neither short nor old",
            -(Rule::binding("height", short) | Rule::binding("age", old)),
        ),
        (
            "heavy but not tall",
            Rule::define().with("weight", heavy).with("height", -Expression::from(tall)).build()?,
        ),
    ];

    let mut inputs = Inputs::new().with("height", args.height).with("age", args.age);
    if let Some(weight) = args.weight {
        inputs.add("weight", weight);
    }
    println!("inputs = {:?}", inputs);

    let norms: Vec<Norms> = if args.all_norms { Norms::ALL.to_vec() } else { vec![args.norms] };

    for (title, rule) in rules.iter() {
        println!("----------------------------------");
        println!("{}: {}", title, rule);
        for &n in norms.iter() {
            match rule.evaluate_with(n, &inputs) {
                Ok(degree) => println!("  [{}] degree = {:.4}", n, degree),
                Err(e) => println!("  [{}] error: {}", n, e),
            }
        }
    }

    Ok(())
}
