//! Basic tensor creation, indexing and arithmetic.
//!
//! Run with:
//! ```bash
//! RUST_LOG=mllib_core=debug cargo run -p mllib-core --example basic_tensor --features subscriber
//! ```

use anyhow::Result;
use mllib_core::tracing_support::{init_tracing, TracingConfig};
use mllib_core::Tensor;

fn main() -> Result<()> {
    init_tracing(TracingConfig::default())?;

    println!("=== mllib-core: Basic Tensor Examples ===\n");

    example_creation();
    example_indexing()?;
    example_arithmetic()?;
    example_errors();

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_creation() {
    println!("--- Tensor Creation ---");

    let filled = Tensor::<f32>::full(&[2, 3], 5.0);
    println!("Filled [2, 3]: size = {}, shape = {:?}", filled.size(), filled.shape());

    let zeros = Tensor::<i32>::zeros(&[2, 2, 2]);
    println!("Zeros {}", zeros);

    let scalar = Tensor::<f64>::zeros(&[]);
    println!("Empty shape holds {} element(s)", scalar.size());

    let hollow = Tensor::<f64>::zeros(&[4, 0]);
    println!("Shape [4, 0] holds {} element(s)", hollow.size());
}

fn example_indexing() -> Result<()> {
    println!("\n--- Indexing ---");

    let mut t = Tensor::<f32>::full(&[2, 2], 0.0);
    *t.at_mut(&[0, 1])? = 42.5;
    println!("at([0, 1]) = {}", t.at(&[0, 1])?);
    println!("at([1, 1]) = {}", t.at(&[1, 1])?);

    t[3] = 7.0;
    println!("flat [3] = {}, at([1, 1]) = {}", t[3], t.at(&[1, 1])?);

    Ok(())
}

fn example_arithmetic() -> Result<()> {
    println!("\n--- Arithmetic ---");

    let a = Tensor::full(&[2, 2], 1);
    let b = Tensor::full(&[2, 2], 2);
    let sum = (&a + &b)?;
    println!("{} + {} = {}", a, b, sum);

    let lhs = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2])?;
    let rhs = Tensor::from_vec(vec![2, 0, 1, 2], &[2, 2])?;
    let product = lhs.matmul(&rhs)?;
    println!("{} x {} = {}", lhs, rhs, product);

    Ok(())
}

fn example_errors() {
    println!("\n--- Errors ---");

    let t = Tensor::<f32>::zeros(&[2, 2]);
    if let Err(err) = t.at(&[0, 1, 2]) {
        println!("at([0, 1, 2]): {} ({:?})", err, err.kind());
    }
    if let Err(err) = t.get(&[0, 2]) {
        println!("get([0, 2]): {} ({:?})", err, err.kind());
    }

    let v = Tensor::<f32>::zeros(&[2]);
    if let Err(err) = t.add(&v) {
        println!("add: {}", err);
    }
    if let Err(err) = t.matmul(&v) {
        println!("matmul: {}", err);
    }
    if let Err(err) = t.matmul(&Tensor::zeros(&[3, 2])) {
        println!("matmul: {}", err);
    }
}
