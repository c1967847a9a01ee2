mod lib;

use log::{info, warn};

use lib::{
    config::Config,
    errors::Result,
    repository::{seed, NewWordBank},
    supabase::Supabase,
    words::{combined_words, stop_words, top_n_list},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    let supabase = Supabase::new(config.supabase_url.clone(), config.supabase_key.clone());

    let stop = stop_words();
    let common = top_n_list(config.top_n);
    if common.len() < config.top_n {
        warn!(
            "Requested {} common words but only {} are bundled",
            config.top_n,
            common.len()
        );
    }
    let words = combined_words(&stop, &common);
    info!(
        "Merged {} stop words and {} common words into {} unique words",
        stop.len(),
        common.len(),
        words.len()
    );

    let bank = NewWordBank {
        user_id: config.user_id,
        name: config.name.clone(),
        is_selected: config.is_selected,
    };
    let report = seed(&supabase, &bank, words).await?;

    println!("{}", report);
    Ok(())
}
