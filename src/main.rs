use clap::Parser;
use mbti_atlas::{cli, config, error, export, geocode, pages, selector, source};
use cli::{Cli, Commands};
use config::Config;
use error::{AtlasError, Result};
use geocode::{GeoLookupAdapter, GeocodeCache, NominatimGeocoder};
use mbti_atlas_common::{CountryProfile, MbtiTable};
use pages::{ContinentReport, LandmarkReport, MyMbtiReport, PageReport, TopCountriesReport};
use source::DataSource;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 출력 후 파일이 지정되어 있으면 내보낸다
fn present<R: PageReport>(report: &R, output: Option<&Path>) -> Result<()> {
    println!("{}\n", report.render_text());

    if let Some(path) = output {
        export::export_report(report, path)?;
        println!("✔ 저장: {}", path.display());
    }
    Ok(())
}

fn load_table(source: &DataSource) -> Result<Arc<MbtiTable>> {
    println!("- 데이터 로드 중: {}", source.path().display());
    let table = source.load()?;
    println!("✔ {}개국 로드\n", table.len());
    Ok(table)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load()?;
    if let Some(path) = &cli.data {
        config.data_path = path.clone();
    }
    let source = DataSource::from_config(&config);

    match cli.command {
        Commands::Landmarks { output } => {
            present(&LandmarkReport::build(), output.as_deref())?;
        }

        Commands::Top { mbti, top_n, no_map, output } => {
            let table = load_table(&source)?;
            let mbti = match mbti {
                Some(t) => t,
                None => selector::select_mbti(table.types())?,
            };
            let top_n = top_n.unwrap_or(config.top_n);

            let mut report = TopCountriesReport::build(&table, mbti, top_n);

            if !no_map {
                println!("- 지도 마커 위치 조회 중...");
                let cache_dir = Config::config_dir()?;
                let geocoder = NominatimGeocoder::new(config.geocoder_url.as_str(), &config.user_agent)
                    .map_err(|e| AtlasError::Geocode(e.to_string()))?;
                let mut adapter =
                    GeoLookupAdapter::new(geocoder, GeocodeCache::load(&cache_dir), config.geocode_timeout());

                report.locate(&mut adapter, true).await;

                if adapter.is_dirty() {
                    if let Err(e) = adapter.cache().save(&cache_dir) {
                        tracing::warn!(error = %e, "지오코딩 캐시 저장 실패");
                    }
                }
                println!("✔ 마커 {}개 생성\n", report.map.markers.len());
            }

            present(&report, output.as_deref())?;
        }

        Commands::Profile { country, output } => {
            let table = load_table(&source)?;
            let country = match country {
                Some(c) => c,
                None => selector::select_country(&table.countries_sorted())?,
            };

            let profile = CountryProfile::build(&table, &country)?;
            present(&profile, output.as_deref())?;
        }

        Commands::Compare { axis, continent_map, output } => {
            let table = load_table(&source)?;
            let axis = match axis {
                Some(a) => a,
                None => selector::select_axis()?,
            };
            let continents = match continent_map {
                Some(path) => mbti_atlas_common::ContinentMap::from_file(&path)?,
                None => config.continent_map()?,
            };

            let report = ContinentReport::build(&table, axis, &continents, &config.anchor_country);
            present(&report, output.as_deref())?;
        }

        Commands::Mine { mbti, output } => {
            let table = load_table(&source)?;
            let mbti = match mbti {
                Some(t) => t,
                None => selector::select_mbti(table.types())?,
            };

            match MyMbtiReport::build(&table, mbti, &config.anchor_country, config.total_population) {
                Ok(report) => present(&report, output.as_deref())?,
                Err(AtlasError::Common(mbti_atlas_common::Error::NotFound(country))) => {
                    println!(
                        "⚠️ 데이터에 '{}'가 없습니다. CSV 파일에서 국가명을 확인해 주세요.",
                        country
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Commands::Config { set_data, show } => {
            if let Some(path) = set_data {
                config.set_data_path(path)?;
                println!("✔ 데이터 경로를 저장했습니다");
            }

            if show {
                println!("설정:");
                println!("  데이터: {}", config.data_path.display());
                println!("  기준 국가: {}", config.anchor_country);
                println!("  기준 인구: {}", mbti_atlas_common::format::thousands(config.total_population as f64));
                println!("  Top N: {}", config.top_n);
                println!("  지오코더: {}", config.geocoder_url);
                println!("  지오코딩 타임아웃: {}초", config.geocode_timeout_seconds);
                println!("  합계 허용 오차: {}", config.row_sum_tolerance);
                match &config.continent_map {
                    Some(path) => println!("  대륙 매핑: {}", path.display()),
                    None => println!("  대륙 매핑: 내장"),
                }
            }
        }

        Commands::Cache { clear, info } => {
            let cache_dir = Config::config_dir()?;
            let cache_path = GeocodeCache::cache_path(&cache_dir);

            if info || !clear {
                if cache_path.exists() {
                    let cache = GeocodeCache::load(&cache_dir);
                    println!("캐시 정보:");
                    println!("  경로: {}", cache_path.display());
                    println!("  건수: {} (좌표 있음 {})", cache.len(), cache.resolved_count());
                    if let Ok(meta) = std::fs::metadata(&cache_path) {
                        println!("  크기: {} bytes", meta.len());
                    }
                } else {
                    println!("캐시 파일이 없습니다: {}", cache_path.display());
                }
            }

            if clear {
                match GeocodeCache::clear(&cache_dir) {
                    Ok(true) => println!("✔ 캐시를 삭제했습니다: {}", cache_path.display()),
                    Ok(false) => println!("캐시 파일이 없습니다"),
                    Err(e) => println!("캐시 삭제 오류: {}", e),
                }
            }
        }
    }

    Ok(())
}
