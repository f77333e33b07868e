//! Narrative templates, parameterized by display locale.
//!
//! There is exactly one engine; only the rendered strings differ per
//! locale. Nothing in scheduling or analysis may branch on [`Locale`] --
//! all localized output goes through the [`Messages`] table.

use serde::{Deserialize, Serialize};

use crate::types::TimeOfDay;

/// Display locale for narrative and chat output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// Parse a locale tag ("en", "ja"), case-insensitive.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ja" => Some(Locale::Ja),
            _ => None,
        }
    }
}

/// Message template table for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Focus-area fallback when a subject has no flagged weak areas.
    pub fn general_review(&self) -> &'static str {
        match self.locale {
            Locale::En => "General review",
            Locale::Ja => "総復習",
        }
    }

    /// Join weak-area labels for the recommendation narrative.
    pub fn join_areas(&self, areas: &[String]) -> String {
        if areas.is_empty() {
            return self.general_review().to_string();
        }
        match self.locale {
            Locale::En => areas.join(" and "),
            Locale::Ja => areas.join("と"),
        }
    }

    /// Join weak-area labels as a plain list.
    pub fn list_areas(&self, areas: &[String]) -> String {
        if areas.is_empty() {
            return self.general_review().to_string();
        }
        match self.locale {
            Locale::En => areas.join(", "),
            Locale::Ja => areas.join("、"),
        }
    }

    /// Display name for a preferred time of day.
    pub fn time_of_day(&self, time: TimeOfDay) -> &'static str {
        match (self.locale, time) {
            (Locale::En, TimeOfDay::Morning) => "morning",
            (Locale::En, TimeOfDay::Afternoon) => "afternoon",
            (Locale::En, TimeOfDay::Evening) => "evening",
            (Locale::En, TimeOfDay::Night) => "night",
            (Locale::Ja, TimeOfDay::Morning) => "朝",
            (Locale::Ja, TimeOfDay::Afternoon) => "午後",
            (Locale::Ja, TimeOfDay::Evening) => "夕方",
            (Locale::Ja, TimeOfDay::Night) => "夜",
        }
    }

    /// Closing narrative for a completed schedule, centered on the
    /// lowest-performing subject.
    pub fn recommendation(
        &self,
        subject: &str,
        performance: u32,
        areas: &str,
        improvement: i32,
    ) -> String {
        match self.locale {
            Locale::En => format!(
                "Based on your test results, I recommend focusing more time on {subject} \
                 where your current performance is {performance}%. With consistent practice \
                 on {areas}, you could improve by approximately {improvement}% in this subject."
            ),
            Locale::Ja => format!(
                "テスト結果から、現在の成績が{performance}%の{subject}に\
                 もっと時間をかけることをおすすめします。{areas}を継続して\
                 練習すれば、この科目で約{improvement}%の向上が見込めます。"
            ),
        }
    }

    /// Opening chat message after a schedule has been generated.
    pub fn greeting(&self, user: &str) -> String {
        match self.locale {
            Locale::En => format!(
                "Hello {user}! I'm your personal study assistant. I've analyzed your test \
                 results and created a personalized study plan. Feel free to ask me any \
                 questions about your schedule, study strategies, or if you need adjustments \
                 to your plan."
            ),
            Locale::Ja => format!(
                "こんにちは、{user}さん！あなた専属の学習アシスタントです。テスト結果を\
                 分析してパーソナライズされた学習プランを作成しました。スケジュールや\
                 勉強法について、何でも聞いてください。"
            ),
        }
    }

    /// Reply to a schedule-adjustment request.
    pub fn adjust_schedule(&self, user: &str, top_subject: &str) -> String {
        match self.locale {
            Locale::En => format!(
                "I'd be happy to adjust your schedule, {user}. Based on your current plan, \
                 I've allocated the most time to {top_subject} since it needs the most \
                 attention. Would you like to make changes to a specific day or subject?"
            ),
            Locale::Ja => format!(
                "{user}さん、もちろんスケジュールを調整できます。現在のプランでは、\
                 最も注意が必要な{top_subject}に一番多くの時間を割り当てています。\
                 特定の日や科目を変更しますか？"
            ),
        }
    }

    /// Reply to a study-strategy question.
    pub fn study_tips(&self, top_subject: &str, areas: &str) -> String {
        match self.locale {
            Locale::En => format!(
                "For effective studying, I recommend:\n\
                 1. Use active recall rather than passive review\n\
                 2. Space out your study sessions for better retention\n\
                 3. For {top_subject}, focus on {areas}\n\
                 4. Take 5-minute breaks every 25 minutes to maintain focus\n\
                 5. Review material before sleeping to improve memory consolidation"
            ),
            Locale::Ja => format!(
                "効果的な学習のために、次をおすすめします：\n\
                 1. 受け身の復習よりアクティブリコールを使う\n\
                 2. 学習セッションの間隔を空けて定着を高める\n\
                 3. {top_subject}は{areas}に集中する\n\
                 4. 25分ごとに5分休憩して集中を保つ\n\
                 5. 寝る前に復習して記憶の定着を促す"
            ),
        }
    }

    /// Time-management tips for a low focus level.
    pub fn focus_tips_low(&self) -> String {
        match self.locale {
            Locale::En => "Since you mentioned having difficulty focusing, try:\n\
                 1. Using the Pomodoro technique (25 min work, 5 min break)\n\
                 2. Eliminating distractions by putting your phone in another room\n\
                 3. Working in a designated study space\n\
                 4. Using website blockers during study sessions"
                .to_string(),
            Locale::Ja => "集中が難しいとのことなので、次を試してみてください：\n\
                 1. ポモドーロ・テクニック（25分作業、5分休憩）\n\
                 2. スマホを別の部屋に置いて気を散らすものを減らす\n\
                 3. 決まった学習スペースで勉強する\n\
                 4. 学習中はサイトブロッカーを使う"
                .to_string(),
        }
    }

    /// Time-management tips for a medium focus level.
    pub fn focus_tips_medium(&self, preferred_time: TimeOfDay) -> String {
        let time = self.time_of_day(preferred_time);
        match self.locale {
            Locale::En => format!(
                "To improve your average focus level:\n\
                 1. Set clear goals for each study session\n\
                 2. Take short breaks between subjects\n\
                 3. Use ambient noise or instrumental music to maintain concentration\n\
                 4. Consider studying at your peak energy time ({time})"
            ),
            Locale::Ja => format!(
                "平均的な集中力を高めるには：\n\
                 1. 各セッションに明確な目標を設定する\n\
                 2. 科目の合間に短い休憩を取る\n\
                 3. 環境音やインストゥルメンタル音楽で集中を保つ\n\
                 4. エネルギーが高い時間帯（{time}）に勉強する"
            ),
        }
    }

    /// Time-management tips for a high focus level.
    pub fn focus_tips_high(&self) -> String {
        match self.locale {
            Locale::En => "To maintain your already strong focus level:\n\
                 1. Challenge yourself with increasingly difficult problems\n\
                 2. Teach concepts to others to solidify understanding\n\
                 3. Use interleaving (mixing related topics) to deepen knowledge\n\
                 4. Reward yourself after completing difficult tasks"
                .to_string(),
            Locale::Ja => "すでに高い集中力を保つために：\n\
                 1. 少しずつ難しい問題に挑戦する\n\
                 2. 人に教えて理解を固める\n\
                 3. 関連トピックを交互に学んで知識を深める\n\
                 4. 難しい課題を終えたら自分にごほうびを"
                .to_string(),
        }
    }

    /// Per-subject analytics summary.
    pub fn subject_summary(
        &self,
        subject: &str,
        performance: u32,
        hours: f64,
        areas: &str,
        improvement: i32,
    ) -> String {
        match self.locale {
            Locale::En => format!(
                "For {subject}, your current performance is at {performance}%. \
                 I've allocated {hours} hours per week to this subject. \
                 Focus areas: {areas}. \
                 With consistent practice, you could improve by approximately \
                 {improvement}% over the next 4 weeks."
            ),
            Locale::Ja => format!(
                "{subject}の現在の成績は{performance}%です。この科目には週{hours}時間を\
                 割り当てました。重点分野：{areas}。継続して練習すれば、今後4週間で\
                 約{improvement}%の向上が見込めます。"
            ),
        }
    }

    /// Reply to a generic how-to question.
    pub fn how_to(&self, top_subject: &str) -> String {
        match self.locale {
            Locale::En => format!(
                "That's a great question! Based on your study profile, I recommend focusing \
                 on consistent daily practice rather than cramming. Your schedule is designed \
                 to prioritize your weaker areas first, especially {top_subject}. Would you \
                 like specific advice for any particular subject?"
            ),
            Locale::Ja => format!(
                "いい質問ですね！あなたの学習プロフィールから、詰め込みより毎日の継続的な\
                 練習をおすすめします。スケジュールは弱い分野、特に{top_subject}を優先する\
                 ように設計されています。特定の科目について具体的なアドバイスが必要ですか？"
            ),
        }
    }

    /// Fallback replies for unmatched queries; one is picked at random.
    pub fn default_replies(
        &self,
        preferred_time: TimeOfDay,
        session_duration: u32,
        days_per_week: u32,
        top_subject: &str,
        overall_improvement: i32,
    ) -> [String; 4] {
        let time = self.time_of_day(preferred_time);
        match self.locale {
            Locale::En => [
                format!(
                    "Based on your study habits, I've optimized your schedule for {time} \
                     studying with {session_duration}-minute sessions. Is there a specific \
                     part of your schedule you'd like to discuss?"
                ),
                format!(
                    "Looking at your test results, I notice that {top_subject} might need \
                     more attention. I've allocated more study time for this subject. Does \
                     that work for you?"
                ),
                format!(
                    "Your schedule is designed for {days_per_week} days per week of \
                     studying. Would you like to adjust this or any other aspect of your plan?"
                ),
                format!(
                    "I've analyzed your learning patterns and test results to create this \
                     personalized schedule. Following it consistently should help you improve \
                     by approximately {overall_improvement}% overall. Is there anything \
                     specific you'd like to change?"
                ),
            ],
            Locale::Ja => [
                format!(
                    "学習習慣に基づいて、{time}に{session_duration}分のセッションで勉強できる\
                     ようスケジュールを最適化しました。相談したい部分はありますか？"
                ),
                format!(
                    "テスト結果を見ると、{top_subject}にもっと注意が必要かもしれません。\
                     この科目に多めの学習時間を割り当てています。これでよろしいですか？"
                ),
                format!(
                    "スケジュールは週{days_per_week}日の学習を想定しています。この設定や\
                     他の部分を調整しますか？"
                ),
                format!(
                    "学習パターンとテスト結果を分析してこのスケジュールを作成しました。\
                     継続すれば全体で約{overall_improvement}%の向上が見込めます。変更したい\
                     点はありますか？"
                ),
            ],
        }
    }

    /// Shown when the responder has nothing to work with.
    pub fn error_reply(&self) -> &'static str {
        match self.locale {
            Locale::En => "Sorry, I encountered an error. Please try again later.",
            Locale::Ja => "申し訳ありません、エラーが発生しました。後でもう一度お試しください。",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("JA"), Some(Locale::Ja));
        assert_eq!(Locale::parse("fr"), None);
    }

    #[test]
    fn test_join_areas_fallback_when_empty() {
        let en = Messages::new(Locale::En);
        assert_eq!(en.join_areas(&[]), "General review");

        let ja = Messages::new(Locale::Ja);
        assert_eq!(ja.join_areas(&[]), "総復習");
    }

    #[test]
    fn test_join_areas_uses_locale_joiner() {
        let areas = vec!["Problem solving".to_string(), "Application".to_string()];
        let en = Messages::new(Locale::En);
        assert_eq!(en.join_areas(&areas), "Problem solving and Application");

        let ja = Messages::new(Locale::Ja);
        assert_eq!(ja.join_areas(&areas), "Problem solvingとApplication");
    }

    #[test]
    fn test_recommendation_mentions_all_fields() {
        let msg = Messages::new(Locale::En).recommendation("Math", 50, "Application", 10);
        assert!(msg.contains("Math"));
        assert!(msg.contains("50%"));
        assert!(msg.contains("Application"));
        assert!(msg.contains("10%"));
    }
}
