// src/application/queries/posts/home.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::{CategoryDto, HomePageDto, PostDto},
        error::ApplicationResult,
    },
    domain::post::PublishedListing,
};

pub const FEATURED_LIMIT: u32 = 5;
pub const LATEST_LIMIT: u32 = 10;
pub const POPULAR_LIMIT: u32 = 5;

impl PostQueryService {
    pub async fn home_page(&self) -> ApplicationResult<HomePageDto> {
        let featured_posts = self.listing(PublishedListing::Featured, FEATURED_LIMIT).await?;
        let latest_posts = self.listing(PublishedListing::Latest, LATEST_LIMIT).await?;
        let popular_posts = self.listing(PublishedListing::Popular, POPULAR_LIMIT).await?;
        let categories = self
            .category_repo
            .list_all()
            .await?
            .into_iter()
            .map(CategoryDto::from)
            .collect();

        Ok(HomePageDto {
            featured_posts,
            latest_posts,
            popular_posts,
            categories,
        })
    }

    async fn listing(&self, listing: PublishedListing, limit: u32) -> ApplicationResult<Vec<PostDto>> {
        Ok(self
            .read_repo
            .list_published(listing, limit)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
