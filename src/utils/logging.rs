use crate::core::domain::Runtime;

pub fn setup_tracing(runtime: Runtime) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false);
    match runtime {
        Runtime::Local => {
            builder.init();
        }
        Runtime::Lambda => {
            // CloudWatch adds its own ingestion time and does not render ANSI colors.
            builder
                .with_ansi(false)
                .without_time()
                .json()
                .init();
        }
    }
}
