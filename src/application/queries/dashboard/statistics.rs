// src/application/queries/dashboard/statistics.rs
use super::DashboardQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogSummaryDto, DashboardDto, DashboardStatisticsDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, UserId},
};

pub const RECENT_POSTS_LIMIT: u32 = 5;

impl DashboardQueryService {
    pub async fn user_dashboard(&self, actor: &AuthenticatedUser) -> ApplicationResult<DashboardDto> {
        let user = self.load_user(actor.id).await?;
        let statistics = self.statistics_for(user.id).await?;
        let recent_posts = self
            .post_repo
            .list_recent_by_author(user.id, RECENT_POSTS_LIMIT)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        let blogs = self
            .blog_repo
            .list_active_by_owner(user.id)
            .await?
            .into_iter()
            .map(BlogSummaryDto::from)
            .collect();

        Ok(DashboardDto {
            user: user.into(),
            statistics,
            recent_posts,
            blogs,
        })
    }

    pub async fn user_statistics(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<DashboardStatisticsDto> {
        let user = self.load_user(actor.id).await?;
        self.statistics_for(user.id).await
    }

    async fn load_user(&self, id: UserId) -> ApplicationResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }

    async fn statistics_for(&self, id: UserId) -> ApplicationResult<DashboardStatisticsDto> {
        let posts = self.post_repo.author_stats(id).await?;
        let total_blogs = self.blog_repo.count_active_by_owner(id).await?;
        let total_comments = self.comment_repo.count_on_posts_by(id).await?;

        Ok(DashboardStatisticsDto {
            total_posts: posts.total_posts,
            total_views: posts.total_views,
            total_blogs,
            featured_posts: posts.featured_posts,
            published_posts: posts.published_posts,
            draft_posts: posts.draft_posts,
            total_comments,
        })
    }
}
