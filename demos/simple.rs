use wff_rs::expr::{BinOp, Expr};
use wff_rs::parse::parse;
use wff_rs::table::TruthTable;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let expr = parse("~(a + b) * c")?;
    println!("expr = {}", expr);

    let propositions = expr.propositions()?;
    println!("propositions = {:?}", propositions.symbols().collect::<Vec<_>>());

    let negated_or = parse("~(a + b)")?;
    let dual = negated_or.clone().demorgan_dual();
    println!("demorgan({}) = {}", negated_or, dual);

    let clause = parse("a + b")?;
    let distributed = clause.distribute(BinOp::And, Expr::atom('c'));
    println!("distributed = {}", distributed);

    let table = TruthTable::build(&expr)?;
    println!("{}", table);
    println!("satisfying assignments: {}", table.count_satisfying());

    Ok(())
}
