//! Example demonstrating the fragment helpers.
//!
//! Run with:
//!   cargo run --example fragments
//!
//! Nothing here touches a database; the rendered SQL and parameter counts are
//! printed so you can see exactly what an executor would receive.

use pgfrag::prelude::*;

fn main() -> FragResult<()> {
    let status: Column<String> = column("users.status")?;
    let age: Column<i32> = column("users.age")?;
    let id: Column<i64> = column("users.id")?;

    println!("distinct : {}", distinct(&status).to_sql());
    println!("max      : {}", max(&age).to_sql());
    println!("count    : {}", count(&id).to_sql());

    // coalesce with a bound default: the placeholder is numbered at render time
    let amount: Column<i64> = column("orders.amount")?;
    let total = coalesce(max(&amount), Fragment::bind(0_i64));
    println!(
        "coalesce : {} ({} param)",
        total.to_sql(),
        total.params_ref().len()
    );

    // aliased sub-expressions embed as their alias name
    let max_amount = max(&amount).alias("max_amount")?;
    println!("aliased  : {}", max_amount.to_sql());
    println!(
        "embedded : {}",
        coalesce(max_amount, Fragment::bind(0_i64)).to_sql()
    );

    // first-row helpers for already-fetched result lists
    let names = vec!["alice", "bob"];
    println!("first    : {:?}", take_first(names.clone()));
    println!("required : {:?}", take_first_or_err(names)?);

    Ok(())
}
