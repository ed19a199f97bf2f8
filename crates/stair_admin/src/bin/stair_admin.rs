use std::env;
use std::io;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use base::entities::EntityId;
use base::requests::ureq::UreqRequestApi;
use base::settings::{ApiSettings, WizardSettings};
use order_wizard::OrderSubmitter;
use stair_admin::draft_runner::{run_draft, DraftRunningConfig};
use stair_admin::params::{stair_config_from_params, CsvFileParams, DraftParams};
use stair_admin::screens::{
    delete_record, render_quote, render_screen, save_record, Screen,
};
use stair_api::{RestStairApi, StairApi};

const LOG_CONFIG_FILE_ENV: &str = "STAIR_ADMIN_LOG_CONFIG_FILE";
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

const USAGE: &str = "usage:
  stair_admin dashboard
  stair_admin list <dashboard|customers|materials|material-categories|orders|wood-types|dimensions>
  stair_admin add <customers|materials|material-categories|orders> <params.csv>
  stair_admin update <customers|materials|material-categories|orders> <id> <params.csv>
  stair_admin quote <params.csv>
  stair_admin order <params.csv>
  stair_admin delete <customers|materials|material-categories|orders> <id>";

fn init_logging() -> Result<()> {
    if let Ok(config_file) = dotenv::var(LOG_CONFIG_FILE_ENV) {
        return log4rs::init_file(&config_file, Default::default())
            .context(format!("error on loading the log config from {}", config_file));
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;

    log4rs::init_config(config)?;

    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging()?;

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(|arg| arg.as_str()).collect();

    let api_settings = ApiSettings::from_env()?;
    let target_logger = api_settings.target_logger.clone();
    let api = RestStairApi::new(api_settings, UreqRequestApi::new());

    match args.as_slice() {
        ["dashboard"] => {
            println!("{}", render_screen(&api, Screen::Dashboard)?);
        }
        ["list", screen] => {
            println!("{}", render_screen(&api, Screen::from_str(screen)?)?);
        }
        ["quote", params_file] => {
            let params = CsvFileParams::from_csv(params_file)?;
            let quote = api.get_quote(&stair_config_from_params(&params)?)?;

            println!("{}", render_quote(&quote));
        }
        ["order", params_file] => {
            let params = DraftParams::try_from(&CsvFileParams::from_csv(params_file)?)?;
            let wizard_settings = WizardSettings::from_env()?;
            let catalogue = api.get_materials()?;
            let submitter = OrderSubmitter::new(&api, wizard_settings, target_logger.as_str());

            run_draft(
                &params,
                DraftRunningConfig {
                    catalogue: &catalogue,
                    categories: wizard_settings.categories,
                    submitter: &submitter,
                },
                &mut io::stdout(),
            )?;
        }
        ["add", screen, params_file] => {
            let screen = Screen::from_str(screen)?;
            let params = CsvFileParams::from_csv(params_file)?;

            let id = save_record(&api, screen, None, &params)?;
            log::info!(target: target_logger.as_str(), "{} record {} added", screen, id);
        }
        ["update", screen, id, params_file] => {
            let screen = Screen::from_str(screen)?;
            let id = EntityId::from_str(id).context(format!("invalid record id {}", id))?;
            let params = CsvFileParams::from_csv(params_file)?;

            save_record(&api, screen, Some(id), &params)?;
            log::info!(target: target_logger.as_str(), "{} record {} updated", screen, id);
        }
        ["delete", screen, id] => {
            let screen = Screen::from_str(screen)?;
            let id = EntityId::from_str(id).context(format!("invalid record id {}", id))?;

            delete_record(&api, screen, id)?;
            log::info!(target: target_logger.as_str(), "{} record {} deleted", screen, id);
        }
        _ => bail!("{}", USAGE),
    }

    Ok(())
}
