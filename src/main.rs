use anyhow::Result;
use custom_sequence::{CustomList, Operand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("custom_sequence=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    init_logger();
    tracing::info!("exercising CustomList against mixed operands");

    let a: CustomList<i32> = CustomList::new();
    let b = 5;

    let res = a + Operand::from(b);
    println!("{}", std::any::type_name_of_val(&res));
    println!("{res}");

    let res = (res - b)?;
    println!("{}", std::any::type_name_of_val(&res));
    println!("{res}");

    Ok(())
}
