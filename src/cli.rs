use clap::{Parser, Subcommand};
use mbti_atlas_common::{Axis, MbtiType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mbti-atlas")]
#[command(about = "국가별 MBTI 분포 통계 대시보드", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// MBTI 비율 CSV 파일 (설정/환경변수보다 우선)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 외국인이 좋아하는 서울 관광지 지도
    Landmarks {
        /// 출력 파일 (.json/.xlsx/.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 선택한 MBTI 유형의 비율이 높은 Top N 국가
    Top {
        /// MBTI 유형 (생략 시 대화형 선택)
        mbti: Option<MbtiType>,

        /// 표시할 국가 수 (기본: 설정값)
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        /// 지오코딩(지도 마커 생성)을 건너뜀
        #[arg(long)]
        no_map: bool,

        /// 출력 파일 (.json/.xlsx/.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 국가별 MBTI 분포 (내림차순)
    Profile {
        /// 국가명 (생략 시 대화형 선택)
        country: Option<String>,

        /// 출력 파일 (.json/.xlsx/.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 성향 축 기준 대륙별 평균 비교
    Compare {
        /// 성향 축 (E vs I / N vs S / T vs F / P vs J)
        axis: Option<Axis>,

        /// 대륙 매핑 JSON 파일 (설정보다 우선)
        #[arg(long)]
        continent_map: Option<PathBuf>,

        /// 출력 파일 (.json/.xlsx/.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 기준 국가 안에서 내 MBTI 순위와 추천 직업
    Mine {
        /// MBTI 유형 (생략 시 대화형 선택)
        mbti: Option<MbtiType>,

        /// 출력 파일 (.json/.xlsx/.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 설정 표시/편집
    Config {
        /// 데이터 파일 경로 저장
        #[arg(long)]
        set_data: Option<PathBuf>,

        /// 설정 표시
        #[arg(long)]
        show: bool,
    },

    /// 지오코딩 캐시 관리
    Cache {
        /// 캐시 삭제
        #[arg(long)]
        clear: bool,

        /// 캐시 정보 표시
        #[arg(long)]
        info: bool,
    },
}
