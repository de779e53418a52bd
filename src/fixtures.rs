//! Bundled sample collections, swapped in whenever a live fetch fails so the
//! UI always has something to render alongside the recorded error.

use crate::domain::{
    LearningPath, PathAuthor, PathLevel, ReadingClubSession, ResearchPaper, SessionStatus,
};

pub fn learning_paths() -> Vec<LearningPath> {
    vec![
        LearningPath {
            id: "path-001".to_string(),
            title: "复杂系统入门路径".to_string(),
            description: "从涌现、自组织到网络科学，系统梳理复杂性研究的基本概念与经典模型。"
                .to_string(),
            content: "从涌现、自组织到网络科学，系统梳理复杂性研究的基本概念与经典模型。"
                .to_string(),
            cover: "https://images.pexels.com/photos/2280571/pexels-photo-2280571.jpeg"
                .to_string(),
            level: PathLevel::Beginner,
            duration_weeks: 6,
            topics: vec!["复杂科学".to_string(), "网络科学".to_string()],
            progress: 0.0,
            mentor: "张江".to_string(),
            resources: 12,
            author: PathAuthor {
                name: "张江".to_string(),
                role: "集智俱乐部创始人".to_string(),
                avatar: String::new(),
            },
            likes: 328,
            comments: 45,
            time_ago: "2周前".to_string(),
            link: "https://pattern.swarma.org/path/1".to_string(),
        },
        LearningPath {
            id: "path-002".to_string(),
            title: "因果涌现研究进阶".to_string(),
            description: "围绕因果涌现理论的核心论文与计算框架，面向有一定基础的研究者。"
                .to_string(),
            content: "围绕因果涌现理论的核心论文与计算框架，面向有一定基础的研究者。"
                .to_string(),
            cover: "https://images.pexels.com/photos/373543/pexels-photo-373543.jpeg"
                .to_string(),
            level: PathLevel::Intermediate,
            duration_weeks: 8,
            topics: vec!["因果涌现".to_string(), "信息论".to_string()],
            progress: 0.0,
            mentor: "刘宇".to_string(),
            resources: 20,
            author: PathAuthor {
                name: "刘宇".to_string(),
                role: "研究员".to_string(),
                avatar: String::new(),
            },
            likes: 156,
            comments: 23,
            time_ago: "1个月前".to_string(),
            link: "https://pattern.swarma.org/path/2".to_string(),
        },
        LearningPath {
            id: "path-003".to_string(),
            title: "AI × 科学前沿专题".to_string(),
            description: "机器学习方法在物理、生物与社会系统建模中的最新应用案例精讲。"
                .to_string(),
            content: "机器学习方法在物理、生物与社会系统建模中的最新应用案例精讲。"
                .to_string(),
            cover: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg"
                .to_string(),
            level: PathLevel::Expert,
            duration_weeks: 10,
            topics: vec!["AI+Science".to_string(), "机器学习".to_string()],
            progress: 0.0,
            mentor: "王小红".to_string(),
            resources: 18,
            author: PathAuthor {
                name: "王小红".to_string(),
                role: "讲师".to_string(),
                avatar: String::new(),
            },
            likes: 97,
            comments: 11,
            time_ago: "3个月前".to_string(),
            link: "https://pattern.swarma.org/path/3".to_string(),
        },
    ]
}

pub fn research_papers() -> Vec<ResearchPaper> {
    vec![
        ResearchPaper {
            id: "paper-001".to_string(),
            title: "Emergence of scaling in random networks".to_string(),
            title_cn: Some("随机网络中标度行为的涌现".to_string()),
            authors: vec!["Albert-László Barabási".to_string(), "Réka Albert".to_string()],
            year: 2024,
            date: "2024-03-18".to_string(),
            journal: Some("Science".to_string()),
            domain: "Network Science".to_string(),
            tags: vec!["复杂网络".to_string(), "无标度网络".to_string()],
            abstract_text: "真实网络的度分布呈幂律形式，增长与偏好连接机制足以解释这一标度行为。"
                .to_string(),
            abstract_en: Some(
                "Degree distributions of real networks follow a power law; growth and \
                 preferential attachment suffice to explain the scaling."
                    .to_string(),
            ),
            thumbnails: Vec::new(),
            link: "https://pattern.swarma.org/paper/sample-1".to_string(),
        },
        ResearchPaper {
            id: "paper-002".to_string(),
            title: "Quantifying causal emergence in multiscale systems".to_string(),
            title_cn: Some("多尺度系统中因果涌现的量化".to_string()),
            authors: vec!["Erik Hoel".to_string()],
            year: 2024,
            date: "2024-06-02".to_string(),
            journal: None,
            domain: "Complex Systems".to_string(),
            tags: vec!["因果涌现".to_string()],
            abstract_text: "宏观尺度的粗粒化描述可以比微观描述携带更多有效信息。".to_string(),
            abstract_en: Some(
                "Coarse-grained macro-scale descriptions can carry more effective \
                 information than the underlying micro scale."
                    .to_string(),
            ),
            thumbnails: Vec::new(),
            link: "https://arxiv.org/abs/2402.00001".to_string(),
        },
        ResearchPaper {
            id: "paper-003".to_string(),
            title: "Machine learning for collective behavior".to_string(),
            title_cn: None,
            authors: vec!["Unknown".to_string()],
            year: 2025,
            date: "2025-01-12".to_string(),
            journal: Some("Nature Communications".to_string()),
            domain: "AI+Science".to_string(),
            tags: vec!["集体行为".to_string(), "机器学习".to_string()],
            abstract_text: "利用图神经网络从轨迹数据中还原群体运动的局部交互规则。".to_string(),
            abstract_en: None,
            thumbnails: Vec::new(),
            link: "https://pattern.swarma.org/paper/sample-3".to_string(),
        },
    ]
}

pub fn reading_club_sessions() -> Vec<ReadingClubSession> {
    vec![
        ReadingClubSession {
            id: "session-001".to_string(),
            title: "理论生态学读书会".to_string(),
            countdown: "13 天后".to_string(),
            cohort_info: "共10期".to_string(),
            members_info: "1位会友".to_string(),
            date_range: "起止时间:2025.12.07~2026.02".to_string(),
            weekly_schedule: "每周日 14:00~16:00".to_string(),
            tags: vec!["AI+Science".to_string(), "复杂科学阅读".to_string()],
            hashtags: vec!["#复杂科学".to_string()],
            summary: Some(
                "面向广大学研工作者的系列论文阅读活动，复杂科学前沿方向的学术社区。"
                    .to_string(),
            ),
            cover: "https://images.pexels.com/photos/15286/pexels-photo.jpg".to_string(),
            link: "https://pattern.swarma.org/study_groups/1".to_string(),
            status_label: "上新".to_string(),
            status: SessionStatus::New,
        },
        ReadingClubSession {
            id: "session-002".to_string(),
            title: "走向意识科学：从现象之窗到理论之梯".to_string(),
            countdown: "直播进行中".to_string(),
            cohort_info: "共10期".to_string(),
            members_info: "205位会友".to_string(),
            date_range: "起止时间:2025.11.14~2026.01".to_string(),
            weekly_schedule: "每周五 19:00~21:00".to_string(),
            tags: vec!["意识科学".to_string(), "神经科学".to_string()],
            hashtags: vec![
                "#神经科学".to_string(),
                "#信息整合".to_string(),
                "#因果涌现".to_string(),
            ],
            summary: Some("探索意识研究从哲学根基到神经科学实验的跨学科路线。".to_string()),
            cover: "https://images.pexels.com/photos/256381/pexels-photo-256381.jpeg"
                .to_string(),
            link: "https://pattern.swarma.org/study_groups/2".to_string(),
            status_label: "进行中".to_string(),
            status: SessionStatus::Running,
        },
        ReadingClubSession {
            id: "session-003".to_string(),
            title: "非线性动力学与混沌".to_string(),
            countdown: "直播进行中".to_string(),
            cohort_info: "共12期".to_string(),
            members_info: "136位会友".to_string(),
            date_range: "起止时间:2025.10.09~2026.01".to_string(),
            weekly_schedule: "每周四 19:30~21:30".to_string(),
            tags: vec!["复杂动力学".to_string(), "非线性".to_string()],
            hashtags: vec!["#混沌".to_string(), "#涌现".to_string()],
            summary: Some(
                "理解非线性系统的共性结构，从理论到仿真案例解析混沌世界的模式。".to_string(),
            ),
            cover: "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg"
                .to_string(),
            link: "https://pattern.swarma.org/study_groups/3".to_string(),
            status_label: "进行中".to_string(),
            status: SessionStatus::Running,
        },
    ]
}
