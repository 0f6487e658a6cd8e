use std::{env, error::Error, fs, path::Path};

use covid_impact::{estimate, EstimationInput};
use log::*;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    input: String,
    output: Option<String>,
    pretty: bool,
    verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: "input.json".into(),
            output: None,
            pretty: true,
            verbose: false,
        }
    }
}

impl Config {
    /// Read config from a TOML file. A missing file means default settings.
    pub fn load(path: &str) -> Result<Config, Box<dyn Error>> {
        if !Path::new(path).exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(path)?;
        Ok(toml::from_str(&data)?)
    }

    /// Read estimation input either as TOML or JSON, depending on the file
    /// extension.
    pub fn read_input(&self) -> Result<EstimationInput, Box<dyn Error>> {
        let data = fs::read_to_string(&self.input)?;
        let input = match Path::new(&self.input).extension() {
            Some(ext) if ext == "toml" => EstimationInput::from_toml(&data)?,
            _ => EstimationInput::from_json(&data)?,
        };
        Ok(input)
    }

    pub fn write_data(&self, data: String) -> Result<(), Box<dyn Error>> {
        match &self.output {
            Some(path) => fs::write(path, data)?,
            None => println!("{}", data),
        }
        Ok(())
    }
}

pub fn main() -> Result<(), Box<dyn Error>> {
    use simple_logger::SimpleLogger;
    SimpleLogger::new().init()?;

    let path = env::args().nth(1).unwrap_or_else(|| "conf.toml".into());
    let cfg = Config::load(&path)?;
    log::set_max_level(if cfg.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    debug!("{:#?}", cfg);

    let result = match estimate(cfg.read_input()?) {
        Ok(result) => result,
        Err(err) => {
            error!("{}: {}", cfg.input, err);
            return Err(err.into());
        }
    };

    let data = if cfg.pretty {
        result.to_json_pretty()?
    } else {
        result.to_json()?
    };
    cfg.write_data(data)
}
