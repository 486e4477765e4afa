use std::error::Error;

use picnic_agent::{init_default_tracing, ClientBuilder, ClientConfig, RunRequest, Runner};

const GROCERY_TASK: &str = "Add these 5 Mediterranean dinner ingredients to my Picnic cart RIGHT NOW: olive oil, feta cheese, cherry tomatoes, pita bread, and chicken breast. Search for each item and add them to cart immediately. Don't ask for confirmation, don't ask follow-up questions, don't suggest modifications - just execute the searches and cart additions.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    init_default_tracing();

    let client = ClientConfig::from_env().build()?;
    let runner = Runner::new(client);

    let result = runner
        .run(
            RunRequest::new(GROCERY_TASK)
                .set_model("openai/gpt-5")
                .add_mcp_server("lucharo/mcp-picnic")
                .set_stream(false),
        )
        .await?;

    println!("{}", result.final_output);

    Ok(())
}
