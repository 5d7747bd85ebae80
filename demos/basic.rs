use bf_bench::{execute, Limits, Program};

fn main() -> anyhow::Result<()> {
    let program = Program::new("+++++++++++++++++++++++++++++++++++++++++++++++++++.");
    let result = execute(&program, &[], &Limits::byte())?;
    println!("{result:?}");
    Ok(())
}
