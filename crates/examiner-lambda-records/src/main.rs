use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    examiner_lambda_records::run().await
}
