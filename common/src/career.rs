//! MBTI 유형별 추천 직업

use crate::types::MbtiType;
use serde::Serialize;

/// 추천 직업과 이유
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerSuggestion {
    pub job: &'static str,
    pub rationale: &'static str,
}

const fn suggestion(job: &'static str, rationale: &'static str) -> CareerSuggestion {
    CareerSuggestion { job, rationale }
}

const CAREER_TABLE: &[(MbtiType, [CareerSuggestion; 2])] = &[
    (
        MbtiType::Intj,
        [
            suggestion("데이터 과학자", "논리적 사고와 전략적 접근을 선호하기 때문에 복잡한 문제를 분석하는 일에 강점이 있습니다."),
            suggestion("전략 컨설턴트", "큰 그림을 보고 체계적으로 해결책을 제시하는 능력이 뛰어납니다."),
        ],
    ),
    (
        MbtiType::Infp,
        [
            suggestion("작가", "감정과 상상을 표현하는 능력이 뛰어나며, 자신만의 세계관을 글로 풀어내는 데 적합합니다."),
            suggestion("심리상담사", "타인의 감정을 깊이 이해하고 공감할 수 있어 사람을 돕는 직업에 잘 어울립니다."),
        ],
    ),
    (
        MbtiType::Entj,
        [
            suggestion("경영 컨설턴트", "목표 지향적이며 리더십이 강해 팀을 이끌고 전략을 설계하는 데 능숙합니다."),
            suggestion("프로젝트 매니저", "조직을 효율적으로 운영하며 결과 중심으로 추진하는 성향이 강합니다."),
        ],
    ),
    (
        MbtiType::Isfp,
        [
            suggestion("디자이너", "섬세한 감성과 미적 감각이 뛰어나 시각적 창의력을 발휘합니다."),
            suggestion("사진작가", "감정과 분위기를 예술적으로 포착하는 능력이 뛰어납니다."),
        ],
    ),
    (
        MbtiType::Enfp,
        [
            suggestion("마케팅 기획자", "창의적이고 사람을 잘 이해하여 새로운 아이디어를 내는 데 탁월합니다."),
            suggestion("콘텐츠 크리에이터", "열정과 표현력이 풍부하여 다양한 매체에서 영향력을 발휘합니다."),
        ],
    ),
    (
        MbtiType::Istj,
        [
            suggestion("회계사", "정확성과 책임감이 뛰어나 체계적인 업무를 수행하는 데 강점이 있습니다."),
            suggestion("공무원", "규칙과 절차를 중시하며 안정적인 환경에서 꾸준히 성과를 내는 스타일입니다."),
        ],
    ),
    (
        MbtiType::Esfj,
        [
            suggestion("교사", "사람들과의 관계를 중요하게 생각하며 타인을 도와주는 데 만족을 느낍니다."),
            suggestion("인사 담당자", "조직 내 사람들의 조화를 유지하고 소통을 중시합니다."),
        ],
    ),
    (
        MbtiType::Infj,
        [
            suggestion("상담사", "깊이 있는 통찰과 공감을 바탕으로 타인의 성장과 치유를 돕습니다."),
            suggestion("작가", "자신의 내면세계를 표현하고 의미 있는 메시지를 전하는 일에 적합합니다."),
        ],
    ),
];

/// 표에 없는 유형에 대한 기본 추천
pub const FALLBACK_CAREERS: [CareerSuggestion; 2] = [
    suggestion("연구원", "깊이 있는 사고력과 분석력을 발휘할 수 있는 분야입니다."),
    suggestion("기획자", "체계적이고 창의적인 접근을 모두 요구하는 직업에 잘 맞습니다."),
];

pub fn recommend(ty: MbtiType) -> &'static [CareerSuggestion] {
    CAREER_TABLE
        .iter()
        .find(|(key, _)| *key == ty)
        .map(|(_, careers)| careers.as_slice())
        .unwrap_or(&FALLBACK_CAREERS)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_dedicated_types() {
        assert_eq!(CAREER_TABLE.len(), 8);
        let fallback = MbtiType::ALL
            .iter()
            .filter(|t| recommend(**t) == FALLBACK_CAREERS.as_slice())
            .count();
        assert_eq!(fallback, 8);
    }

    #[test]
    fn test_recommend_intj() {
        let careers = recommend(MbtiType::Intj);
        assert_eq!(careers.len(), 2);
        assert_eq!(careers[0].job, "데이터 과학자");
        assert_eq!(careers[1].job, "전략 컨설턴트");
    }

    #[test]
    fn test_estp_gets_fallback_verbatim() {
        let careers = recommend(MbtiType::Estp);
        assert_eq!(careers, &FALLBACK_CAREERS);
        assert_eq!(careers[0].job, "연구원");
        assert_eq!(careers[0].rationale, "깊이 있는 사고력과 분석력을 발휘할 수 있는 분야입니다.");
        assert_eq!(careers[1].job, "기획자");
    }
}
